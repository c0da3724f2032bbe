// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Scratch image file that is removed when it goes out of scope

use std::io::{self, Cursor, Write};
use std::path::Path;

use image::{ImageFormat, RgbImage};
use tempfile::{Builder, NamedTempFile};

use super::PaletteError;
use crate::vision::image_utils::format_to_extension;

/// An image persisted to a temporary file for the lifetime of this value
///
/// The file is unlinked on drop, including on early return and unwinding.
#[derive(Debug)]
pub struct ScopedTempImage {
    file: NamedTempFile,
}

impl ScopedTempImage {
    /// Encode `image` as `format` into a fresh file under `dir`
    /// (the system temp dir when `None`)
    pub fn write(
        image: &RgbImage,
        format: ImageFormat,
        dir: Option<&Path>,
    ) -> Result<Self, PaletteError> {
        let mut encoded = Cursor::new(Vec::new());
        image
            .write_to(&mut encoded, format)
            .map_err(PaletteError::Encode)?;

        let suffix = format!(".{}", format_to_extension(format));
        let mut builder = Builder::new();
        builder.prefix("logo-").suffix(&suffix);
        let mut file = match dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        }
        .map_err(PaletteError::TempFile)?;

        write_all(&mut file, encoded.get_ref()).map_err(PaletteError::TempFile)?;

        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Delete the file now, reporting a failed unlink instead of ignoring it
    pub fn close(self) -> io::Result<()> {
        self.file.close()
    }
}

fn write_all(file: &mut NamedTempFile, bytes: &[u8]) -> io::Result<()> {
    file.write_all(bytes)?;
    file.flush()
}
