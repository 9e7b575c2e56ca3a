// src/utils/mod.rs

pub mod flash;
pub mod form_body;
pub mod hash;
pub mod html;
pub mod jwt;
pub mod request_kind;
pub mod validators;
