//! Shared fixture-tree helpers for the integration tests.
//!
//! The compiler and interpreter are stood in for by small POSIX shell scripts:
//!
//! - the compiler rejects any source containing `TYPE_ERROR` (diagnostic on stderr, exit 1); otherwise it writes
//!   `<stem>.ll` and copies the source to `<stem>.bc`, like the real compiler writing beside the source;
//! - the interpreter looks at the first line of the artifact: `echo` copies stdin to stdout, anything else prints the
//!   remaining lines verbatim.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use latcheck::ToolCommand;
use tempfile::TempDir;

const COMPILER: &str = r#"src="$1"
base="${src%.lat}"
if grep -q 'TYPE_ERROR' "$src"; then
  echo "$src: error: type mismatch" >&2
  exit 1
fi
printf '; ModuleID = %s\n' "$src" > "$base.ll"
cp "$src" "$base.bc"
"#;

const INTERPRETER: &str = r#"if [ "$(head -n 1 "$1")" = "echo" ]; then
  cat
else
  tail -n +2 "$1"
fi
"#;

/// A temporary workspace holding the fake tools and any number of fixture directories.
pub struct Workspace {
    pub root: TempDir,
    pub compiler: PathBuf,
    pub interpreter: PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        let compiler = root.path().join("latc.sh");
        let interpreter = root.path().join("lli.sh");
        fs::write(&compiler, COMPILER).unwrap();
        fs::write(&interpreter, INTERPRETER).unwrap();
        Self {
            root,
            compiler,
            interpreter,
        }
    }

    pub fn compiler_command(&self) -> ToolCommand {
        ToolCommand::new("sh").arg(self.compiler.to_str().unwrap())
    }

    pub fn interpreter_command(&self) -> ToolCommand {
        ToolCommand::new("sh").arg(self.interpreter.to_str().unwrap())
    }

    /// Create (if needed) a fixture directory under the workspace.
    pub fn dir(&self, name: &str) -> PathBuf {
        let dir = self.root.path().join(name);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    pub fn write(&self, dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }
}

/// Sorted file names of a directory.
pub fn listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
