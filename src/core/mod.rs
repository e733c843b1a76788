pub mod config;
pub mod contact;
pub mod document_parser;
pub mod docx;
pub mod education;
pub mod errors;
pub mod experience;
pub mod models;
pub mod ner;
pub mod normalizer;
pub mod pdf;
pub mod processor;
pub mod report;
pub mod scorer;
pub mod service;
pub mod skills;
