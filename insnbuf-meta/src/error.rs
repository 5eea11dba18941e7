use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("`{name}` does not name a known {kind}")]
    UnknownTag { kind: &'static str, name: String },
}
