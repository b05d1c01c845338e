/* This file is part of the Shorts Bot Dashboard project
*
*  Copyright (C) 2026 Shorts Bot Dashboard contributors
*
*  Some code was adapted from the built library: https://github.com/lukaslueg/built,
*  which is licensed under the MIT license.
*
*  This program is free software: you can redistribute it and/or modify
*  it under the terms of the GNU Affero General Public License as published by
*  the Free Software Foundation, either version 3 of the License, or
*  (at your option) any later version.
*
*  This program is distributed in the hope that it will be useful,
*  but WITHOUT ANY WARRANTY; without even the implied warranty of
*  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
*  GNU Affero General Public License for more details.
*
*  You should have received a copy of the GNU Affero General Public License
*  along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use std::{env, fs::OpenOptions, io::Write, path::{Path, PathBuf}};

use chrono::{FixedOffset, TimeZone};
use cloneable_errors::{ErrContext, ErrorContext, ResContext};
use git2::{ErrorClass, ErrorCode, Repository};

fn main() -> Result<(), ErrorContext> {
    let out_dir = PathBuf::from(env::var("OUT_DIR").context("OUT_DIR not set")?);
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").context("CARGO_MANIFEST_DIR not set")?);
    let built_file = out_dir.join("built.rs");

    built::write_built_file_with_opts(Some(&manifest_dir), &built_file)
        .context("Failed to write build-time info")?;

    let timestamp = commit_timestamp(&manifest_dir).context("Failed to read the commit timestamp")?;
    let literal = match timestamp {
        None => "None".to_owned(),
        Some(ts) => format!("Some(\"{}\")", ts.escape_default()),
    };

    let mut file = OpenOptions::new()
        .append(true)
        .open(&built_file)
        .context("Failed to reopen the build-time info file")?;
    writeln!(
        file,
        "#[doc = \"Time of the HEAD commit, RFC3339\"]\n#[allow(dead_code)]\npub const GIT_COMMIT_TIMESTAMP: Option<&str> = {literal};"
    ).context("Failed to append the commit timestamp")?;
    Ok(())
}

/// `None` when building outside of a git checkout
fn commit_timestamp(manifest_dir: &Path) -> Result<Option<String>, ErrorContext> {
    let repo = match Repository::discover(manifest_dir) {
        Ok(repo) => repo,
        Err(e) if e.class() == ErrorClass::Repository && e.code() == ErrorCode::NotFound => return Ok(None),
        Err(e) => return Err(e.context("Failed to open the git repository")),
    };
    let commit = repo
        .head().context("Failed to read HEAD")?
        .peel_to_commit().context("HEAD does not point to a commit")?;
    let time = commit.time();
    let offset = FixedOffset::east_opt(time.offset_minutes() * 60).context("Commit has an invalid timezone offset")?;
    let datetime = offset
        .timestamp_opt(time.seconds(), 0)
        .single()
        .context("Commit timestamp is out of range")?;
    Ok(Some(datetime.to_rfc3339()))
}
