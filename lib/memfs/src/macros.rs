/// Unwraps a `Result<T, Errno>`, returning the errno to the syscall caller
/// on failure. The second form lifts an `Option<T>` with the errno to report
/// when it is `None`.
macro_rules! wasi_try {
    ($expr:expr) => {{
        let res: Result<_, memfs_wasi_types::Errno> = $expr;
        match res {
            Ok(val) => val,
            Err(err) => return err,
        }
    }};
    ($expr:expr; $e:expr) => {{
        let opt: Option<_> = $expr;
        wasi_try!(opt.ok_or($e))
    }};
}
