//! Reading graph descriptions from files or stdin.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use structeq_core::{GraphError, NamedGraph, TypeId};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("unknown definition '{0}'")]
    UnknownDefinition(String),
}

/// Load and resolve a description; `-` reads stdin.
pub fn load_graph(path: &Path) -> Result<NamedGraph, LoadError> {
    let json = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(LoadError::Stdin)?;
        buf
    } else {
        fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.display().to_string(),
            source,
        })?
    };

    let named = NamedGraph::from_json(&json)?;
    info!(
        definitions = named.len(),
        nodes = named.graph().len(),
        "loaded graph description"
    );
    Ok(named)
}

/// Id of a definition, or `UnknownDefinition`.
pub fn lookup(named: &NamedGraph, name: &str) -> Result<TypeId, LoadError> {
    named
        .get(name)
        .ok_or_else(|| LoadError::UnknownDefinition(name.to_owned()))
}

/// Print the error and exit with status 2.
pub fn exit_with(err: LoadError) -> ! {
    eprintln!("error: {}", err);
    std::process::exit(2);
}
