#![allow(missing_docs)]

pub(crate) mod html;
pub(crate) mod server;

pub(crate) use html::{assert_valid_html, parse_html_document, parse_html_fragment};
pub(crate) use server::{must_create_test_database, must_create_test_server};
