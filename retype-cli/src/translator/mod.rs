//! Translation service clients

pub mod google;

pub use google::GoogleTranslator;
