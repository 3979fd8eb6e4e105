//! Stage 3: read the binary, the loader and its snippets

use std::io;
use std::path::{Path, PathBuf};

use crate::domain::entities::{ArtifactSet, BinaryArtifact, LoaderScript, SnippetScript};
use crate::domain::ports::FileSystem;
use crate::embed::discover_snippets;
use crate::error::{ArtifactKind, SoupError, SoupResult};
use crate::layout::ProjectLayout;

/// Load every artifact the page needs.
///
/// Fails with `MissingArtifact` on the first file that does not exist,
/// including any snippet the loader imports.
pub fn load_artifacts(layout: &ProjectLayout, fs: &impl FileSystem) -> SoupResult<ArtifactSet> {
    let binary_path = layout.embedded_wasm();
    let bytes = fs
        .read_bytes(&binary_path)
        .map_err(|e| read_error(e, ArtifactKind::Binary, &binary_path))?;

    let loader_path = layout.loader();
    let text = fs
        .read_to_string(&loader_path)
        .map_err(|e| read_error(e, ArtifactKind::Loader, &loader_path))?;

    let snippets = discover_snippets(&text, &layout.package)
        .into_iter()
        .map(|reference| {
            let path = layout.snippet(&reference.path);
            let text = fs
                .read_to_string(&path)
                .map_err(|e| read_error(e, ArtifactKind::Snippet, &path))?;
            Ok(SnippetScript {
                reference,
                path,
                text,
            })
        })
        .collect::<SoupResult<Vec<_>>>()?;

    Ok(ArtifactSet {
        binary: BinaryArtifact {
            path: binary_path,
            bytes,
        },
        loader: LoaderScript {
            path: loader_path,
            text,
            binary_literal: layout.bindgen_wasm_name(),
        },
        snippets,
    })
}

fn read_error(err: io::Error, kind: ArtifactKind, path: &Path) -> SoupError {
    if err.kind() == io::ErrorKind::NotFound {
        SoupError::MissingArtifact {
            kind,
            path: PathBuf::from(path),
        }
    } else {
        SoupError::Io(err)
    }
}
