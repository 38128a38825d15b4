pub mod google_translator;
pub mod traits;
