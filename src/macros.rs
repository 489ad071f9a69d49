//! Variadic front-ends for the category functions.
//!
//! - `info!(a, b, ...)` concatenates the `Display` output of every argument, no separator.
//! - `infof!("x={}", 7)` takes a `format!`-style string.
//! - `infoln!(a, b, ...)` joins with single spaces and ends the line.
//!
//! The same three shapes exist for `error`, `warn`, `emph`, `good` and `bad`, plus `fatal`
//! (exits with status 1) and the formatted and newline shapes of `panic`.

#[doc(hidden)]
#[macro_export]
macro_rules! __concat {
    ($($arg:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut s = ::std::string::String::new();
        $(
            {
                use ::std::fmt::Write as _;
                let _ = ::std::write!(s, "{}", $arg);
            }
        )*
        s
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __parts {
    ($($arg:expr),* $(,)?) => {
        &[$(&$arg as &dyn ::std::fmt::Display),*]
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:expr),* $(,)?) => { $crate::error($crate::__concat!($($arg),*)) };
}

#[macro_export]
macro_rules! errorf {
    ($($arg:tt)+) => { $crate::errorf(::std::format_args!($($arg)+)) };
}

#[macro_export]
macro_rules! errorln {
    ($($arg:expr),* $(,)?) => { $crate::errorln($crate::__parts!($($arg),*)) };
}

#[macro_export]
macro_rules! warn {
    ($($arg:expr),* $(,)?) => { $crate::warn($crate::__concat!($($arg),*)) };
}

#[macro_export]
macro_rules! warnf {
    ($($arg:tt)+) => { $crate::warnf(::std::format_args!($($arg)+)) };
}

#[macro_export]
macro_rules! warnln {
    ($($arg:expr),* $(,)?) => { $crate::warnln($crate::__parts!($($arg),*)) };
}

#[macro_export]
macro_rules! emph {
    ($($arg:expr),* $(,)?) => { $crate::emph($crate::__concat!($($arg),*)) };
}

#[macro_export]
macro_rules! emphf {
    ($($arg:tt)+) => { $crate::emphf(::std::format_args!($($arg)+)) };
}

#[macro_export]
macro_rules! emphln {
    ($($arg:expr),* $(,)?) => { $crate::emphln($crate::__parts!($($arg),*)) };
}

#[macro_export]
macro_rules! info {
    ($($arg:expr),* $(,)?) => { $crate::info($crate::__concat!($($arg),*)) };
}

#[macro_export]
macro_rules! infof {
    ($($arg:tt)+) => { $crate::infof(::std::format_args!($($arg)+)) };
}

#[macro_export]
macro_rules! infoln {
    ($($arg:expr),* $(,)?) => { $crate::infoln($crate::__parts!($($arg),*)) };
}

#[macro_export]
macro_rules! good {
    ($($arg:expr),* $(,)?) => { $crate::good($crate::__concat!($($arg),*)) };
}

#[macro_export]
macro_rules! goodf {
    ($($arg:tt)+) => { $crate::goodf(::std::format_args!($($arg)+)) };
}

#[macro_export]
macro_rules! goodln {
    ($($arg:expr),* $(,)?) => { $crate::goodln($crate::__parts!($($arg),*)) };
}

#[macro_export]
macro_rules! bad {
    ($($arg:expr),* $(,)?) => { $crate::bad($crate::__concat!($($arg),*)) };
}

#[macro_export]
macro_rules! badf {
    ($($arg:tt)+) => { $crate::badf(::std::format_args!($($arg)+)) };
}

#[macro_export]
macro_rules! badln {
    ($($arg:expr),* $(,)?) => { $crate::badln($crate::__parts!($($arg),*)) };
}

#[macro_export]
macro_rules! fatal {
    ($($arg:expr),* $(,)?) => { $crate::fatal($crate::__concat!($($arg),*)) };
}

#[macro_export]
macro_rules! fatalf {
    ($($arg:tt)+) => { $crate::fatalf(::std::format_args!($($arg)+)) };
}

#[macro_export]
macro_rules! fatalln {
    ($($arg:expr),* $(,)?) => { $crate::fatalln($crate::__parts!($($arg),*)) };
}

// No plain `panic!`: it would shadow std's for glob importers. Use `termlog::panic` instead.
#[macro_export]
macro_rules! panicf {
    ($($arg:tt)+) => { $crate::panicf(::std::format_args!($($arg)+)) };
}

#[macro_export]
macro_rules! panicln {
    ($($arg:expr),* $(,)?) => { $crate::panicln($crate::__parts!($($arg),*)) };
}
