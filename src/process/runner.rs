use std::{
    ffi::OsStr,
    io::{self, Read},
    process::{Child, Command, ExitStatus, Stdio},
};

use thiserror::Error;
use tracing::{debug, warn};

/// Bytes pulled from the child's stdout per read.
pub const CHUNK_SIZE: usize = 128;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("no stdout pipe for {program}")]
    MissingStdout { program: String },
    #[error("failed to read output of {program}: {source}")]
    Read {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to wait on {program}: {source}")]
    Wait {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// Owns a spawned child until it has been reaped.
///
/// Dropping the guard without calling [`ChildGuard::wait`] kills the child if
/// it is still running and then waits on it, so no zombie is left behind.
struct ChildGuard {
    child: Option<Child>,
}

impl ChildGuard {
    fn new(child: Child) -> Self {
        Self { child: Some(child) }
    }

    fn stdout(&mut self) -> Option<std::process::ChildStdout> {
        self.child.as_mut().and_then(|c| c.stdout.take())
    }

    fn wait(mut self) -> io::Result<ExitStatus> {
        match self.child.take() {
            Some(mut child) => child.wait(),
            None => Err(io::Error::other("child already reaped")),
        }
    }
}

impl Drop for ChildGuard {
    fn drop(&mut self) {
        if let Some(mut child) = self.child.take() {
            if child.try_wait().ok().flatten().is_none() {
                if let Err(e) = child.kill() {
                    warn!("failed to kill child {}: {}", child.id(), e);
                }
            }
            if let Err(e) = child.wait() {
                warn!("failed to reap child {}: {}", child.id(), e);
            }
        }
    }
}

/// Runs `program` with `args` and returns everything it wrote to stdout.
///
/// The program is executed directly, never through a shell, so arguments
/// reach it verbatim. Stdin and stderr are inherited. Stdout is drained in
/// [`CHUNK_SIZE`] reads until end-of-stream, which blocks for as long as the
/// child keeps the pipe open. The exit status is logged but not treated as a
/// failure.
pub fn capture_stdout<P, I, S>(program: P, args: I) -> Result<String, RunError>
where
    P: AsRef<OsStr>,
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let program = program.as_ref();
    let name = program.to_string_lossy().into_owned();

    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit());
    debug!("spawning {:?}", command);

    let child = command.spawn().map_err(|source| RunError::Spawn {
        program: name.clone(),
        source,
    })?;
    let mut guard = ChildGuard::new(child);

    let mut stdout = guard
        .stdout()
        .ok_or_else(|| RunError::MissingStdout { program: name.clone() })?;

    let bytes = read_chunks(&mut stdout).map_err(|source| RunError::Read {
        program: name.clone(),
        source,
    })?;
    drop(stdout);
    debug!("captured {} bytes from {}", bytes.len(), name);

    let status = guard.wait().map_err(|source| RunError::Wait {
        program: name.clone(),
        source,
    })?;
    if !status.success() {
        warn!("{} exited with {}", name, status);
    }

    // decode once all chunks are in; a character may straddle two reads
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn read_chunks<R: Read>(reader: &mut R) -> io::Result<Vec<u8>> {
    let mut buffer = [0u8; CHUNK_SIZE];
    let mut bytes = Vec::new();

    loop {
        match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => bytes.extend_from_slice(&buffer[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(bytes)
}
