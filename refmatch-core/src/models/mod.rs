pub mod exon;
pub mod gene;
pub mod score;
pub mod strand;
pub mod transcript;
pub mod xref;

// re-export for cleaner imports
pub use self::exon::ExonInterval;
pub use self::gene::GeneModel;
pub use self::score::MatchScore;
pub use self::strand::Strand;
pub use self::transcript::{TranscriptModel, TranslationModel};
pub use self::xref::{CrossReference, DependentXref, TranscriptAttrib, XrefTarget};
