//! Process-exit finalizer registration.
//!
//! Summary output must fire on normal exit without an explicit teardown
//! call. Handlers registered here run LIFO inside libc's exit sequence, so
//! lazily-created components finalize in reverse order of first use. Nothing
//! runs on abnormal termination (fatal signal, forced kill).

pub(crate) fn on_process_exit(hook: extern "C" fn()) {
    // SAFETY: `atexit` only stores the function pointer for the C runtime to
    // invoke during normal exit; `hook` carries no data and must not unwind.
    unsafe {
        let _ = libc::atexit(hook);
    }
}
