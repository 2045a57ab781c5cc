macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod accuracy_ops;
pub mod batch_ops;
pub mod lexicon_ops;
pub mod read_ops;

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("cannot read {path}: {source}")]
    Io { path: String, source: io::Error },
    #[error("invalid corpus TOML: {0}")]
    Corpus(#[from] toml::de::Error),
    #[error(transparent)]
    Lexicon(#[from] docso_core::LexiconError),
}

impl CommandError {
    pub(crate) fn io(path: &str, source: io::Error) -> Self {
        CommandError::Io {
            path: path.to_string(),
            source,
        }
    }
}
