//! Named test blocks collected during startup and run on demand.
//!
//! This replaces auto-run registration tricks with an explicit registry:
//! ordinary initialization code registers named closures, and the caller
//! invokes [`run_blocks`] once, before its main body. Blocks run in
//! insertion order; ordering across modules is simply the order in which
//! the caller's startup code registered them.

use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use thiserror::Error;

/// Errors from block registration and execution.
#[derive(Debug, Error)]
pub enum BlockError {
    /// A block with the same name is already registered.
    #[error("test block `{0}` is already registered")]
    Duplicate(String),
    /// The registered blocks were already run.
    #[error("registered test blocks were already run")]
    AlreadyRan,
}

struct Block {
    name: String,
    body: Box<dyn FnOnce() + Send>,
}

static BLOCKS: Mutex<Vec<Block>> = Mutex::new(Vec::new());
static RAN: AtomicBool = AtomicBool::new(false);

/// Register a named block to be run later by [`run_blocks`].
pub fn register_block(
    name: impl Into<String>,
    body: impl FnOnce() + Send + 'static,
) -> Result<(), BlockError> {
    let name = name.into();
    let mut blocks = BLOCKS.lock();
    if blocks.iter().any(|block| block.name == name) {
        return Err(BlockError::Duplicate(name));
    }
    blocks.push(Block {
        name,
        body: Box::new(body),
    });
    Ok(())
}

/// Run every registered block in insertion order. Returns how many ran.
///
/// The registry is drained before running, so a block body may register
/// further blocks without deadlocking; those late registrations are not
/// picked up. A second call is an error.
pub fn run_blocks() -> Result<usize, BlockError> {
    if RAN.swap(true, Ordering::SeqCst) {
        return Err(BlockError::AlreadyRan);
    }
    let blocks: Vec<Block> = std::mem::take(&mut *BLOCKS.lock());
    let count = blocks.len();
    for block in blocks {
        (block.body)();
    }
    Ok(count)
}
