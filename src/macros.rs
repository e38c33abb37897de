macro_rules! auto_increment {
    () => {{
        use std::sync::atomic::{AtomicU32, Ordering};

        static COUNTER: AtomicU32 = AtomicU32::new(1);
        COUNTER.fetch_add(1, Ordering::Relaxed)
    }};
}

pub(crate) use auto_increment;

/// Build [`Params`](crate::Params) from `Name: value` pairs, keeping the given order.
macro_rules! params {
    ($($key:ident: $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut params = $crate::params::Params::new();
        $(params.insert(stringify!($key), $value);)*
        params
    }};
}

pub(crate) use params;
