//! ページパスワードの読み込み元

mod json_file;

pub use json_file::JsonFilePagePasswordSource;
