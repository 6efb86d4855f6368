//! Accessor-generation macros for the attribute surface.
//!
//! Attributes are declared as a table entry: method names, semantic type,
//! and the driver symbol base. Each generated accessor owns a per-call-site
//! [`FunctionCache`](nidaqmx_sys::FunctionCache) static, so
//! `DAQmxGet<Base>`/`DAQmxSet<Base>`/`DAQmxReset<Base>` are bound lazily
//! and exactly once per process.

macro_rules! chan_attr_f64 {
    ($(#[$doc:meta])* $get:ident, $set:ident, $reset:ident, $base:literal) => {
        $(#[$doc])*
        pub fn $get(&self) -> $crate::error::Result<f64> {
            static GET: ::nidaqmx_sys::FunctionCache<::nidaqmx_sys::GetChanAttrF64Fn> =
                ::nidaqmx_sys::FunctionCache::new(concat!("DAQmxGet", $base));
            $crate::channels::attr::get_f64(&GET, self.task, &self.name)
        }

        #[doc = concat!("Sets [`", stringify!($get), "`](Self::", stringify!($get), ").")]
        pub fn $set(&self, value: f64) -> $crate::error::Result<()> {
            static SET: ::nidaqmx_sys::FunctionCache<::nidaqmx_sys::SetChanAttrF64Fn> =
                ::nidaqmx_sys::FunctionCache::new(concat!("DAQmxSet", $base));
            $crate::channels::attr::set_f64(&SET, self.task, &self.name, value)
        }

        #[doc = concat!("Resets [`", stringify!($get), "`](Self::", stringify!($get), ") to the driver default.")]
        pub fn $reset(&self) -> $crate::error::Result<()> {
            static RESET: ::nidaqmx_sys::FunctionCache<::nidaqmx_sys::ResetChanAttrFn> =
                ::nidaqmx_sys::FunctionCache::new(concat!("DAQmxReset", $base));
            $crate::channels::attr::reset(&RESET, self.task, &self.name)
        }
    };
}

macro_rules! chan_attr_f64_ro {
    ($(#[$doc:meta])* $get:ident, $base:literal) => {
        $(#[$doc])*
        pub fn $get(&self) -> $crate::error::Result<f64> {
            static GET: ::nidaqmx_sys::FunctionCache<::nidaqmx_sys::GetChanAttrF64Fn> =
                ::nidaqmx_sys::FunctionCache::new(concat!("DAQmxGet", $base));
            $crate::channels::attr::get_f64(&GET, self.task, &self.name)
        }
    };
}

macro_rules! chan_attr_u32 {
    ($(#[$doc:meta])* $get:ident, $set:ident, $reset:ident, $base:literal) => {
        $(#[$doc])*
        pub fn $get(&self) -> $crate::error::Result<u32> {
            static GET: ::nidaqmx_sys::FunctionCache<::nidaqmx_sys::GetChanAttrU32Fn> =
                ::nidaqmx_sys::FunctionCache::new(concat!("DAQmxGet", $base));
            $crate::channels::attr::get_u32(&GET, self.task, &self.name)
        }

        #[doc = concat!("Sets [`", stringify!($get), "`](Self::", stringify!($get), ").")]
        pub fn $set(&self, value: u32) -> $crate::error::Result<()> {
            static SET: ::nidaqmx_sys::FunctionCache<::nidaqmx_sys::SetChanAttrU32Fn> =
                ::nidaqmx_sys::FunctionCache::new(concat!("DAQmxSet", $base));
            $crate::channels::attr::set_u32(&SET, self.task, &self.name, value)
        }

        #[doc = concat!("Resets [`", stringify!($get), "`](Self::", stringify!($get), ") to the driver default.")]
        pub fn $reset(&self) -> $crate::error::Result<()> {
            static RESET: ::nidaqmx_sys::FunctionCache<::nidaqmx_sys::ResetChanAttrFn> =
                ::nidaqmx_sys::FunctionCache::new(concat!("DAQmxReset", $base));
            $crate::channels::attr::reset(&RESET, self.task, &self.name)
        }
    };
}

macro_rules! chan_attr_u32_ro {
    ($(#[$doc:meta])* $get:ident, $base:literal) => {
        $(#[$doc])*
        pub fn $get(&self) -> $crate::error::Result<u32> {
            static GET: ::nidaqmx_sys::FunctionCache<::nidaqmx_sys::GetChanAttrU32Fn> =
                ::nidaqmx_sys::FunctionCache::new(concat!("DAQmxGet", $base));
            $crate::channels::attr::get_u32(&GET, self.task, &self.name)
        }
    };
}

macro_rules! chan_attr_bool {
    ($(#[$doc:meta])* $get:ident, $set:ident, $reset:ident, $base:literal) => {
        $(#[$doc])*
        pub fn $get(&self) -> $crate::error::Result<bool> {
            static GET: ::nidaqmx_sys::FunctionCache<::nidaqmx_sys::GetChanAttrBoolFn> =
                ::nidaqmx_sys::FunctionCache::new(concat!("DAQmxGet", $base));
            $crate::channels::attr::get_bool(&GET, self.task, &self.name)
        }

        #[doc = concat!("Sets [`", stringify!($get), "`](Self::", stringify!($get), ").")]
        pub fn $set(&self, value: bool) -> $crate::error::Result<()> {
            static SET: ::nidaqmx_sys::FunctionCache<::nidaqmx_sys::SetChanAttrBoolFn> =
                ::nidaqmx_sys::FunctionCache::new(concat!("DAQmxSet", $base));
            $crate::channels::attr::set_bool(&SET, self.task, &self.name, value)
        }

        #[doc = concat!("Resets [`", stringify!($get), "`](Self::", stringify!($get), ") to the driver default.")]
        pub fn $reset(&self) -> $crate::error::Result<()> {
            static RESET: ::nidaqmx_sys::FunctionCache<::nidaqmx_sys::ResetChanAttrFn> =
                ::nidaqmx_sys::FunctionCache::new(concat!("DAQmxReset", $base));
            $crate::channels::attr::reset(&RESET, self.task, &self.name)
        }
    };
}

macro_rules! chan_attr_bool_ro {
    ($(#[$doc:meta])* $get:ident, $base:literal) => {
        $(#[$doc])*
        pub fn $get(&self) -> $crate::error::Result<bool> {
            static GET: ::nidaqmx_sys::FunctionCache<::nidaqmx_sys::GetChanAttrBoolFn> =
                ::nidaqmx_sys::FunctionCache::new(concat!("DAQmxGet", $base));
            $crate::channels::attr::get_bool(&GET, self.task, &self.name)
        }
    };
}

macro_rules! chan_attr_string {
    ($(#[$doc:meta])* $get:ident, $set:ident, $reset:ident, $base:literal) => {
        $(#[$doc])*
        pub fn $get(&self) -> $crate::error::Result<String> {
            static GET: ::nidaqmx_sys::FunctionCache<::nidaqmx_sys::GetChanAttrStringFn> =
                ::nidaqmx_sys::FunctionCache::new(concat!("DAQmxGet", $base));
            $crate::channels::attr::get_string(&GET, self.task, &self.name)
        }

        #[doc = concat!("Sets [`", stringify!($get), "`](Self::", stringify!($get), ").")]
        pub fn $set(&self, value: &str) -> $crate::error::Result<()> {
            static SET: ::nidaqmx_sys::FunctionCache<::nidaqmx_sys::SetChanAttrStringFn> =
                ::nidaqmx_sys::FunctionCache::new(concat!("DAQmxSet", $base));
            $crate::channels::attr::set_string(&SET, self.task, &self.name, value)
        }

        #[doc = concat!("Resets [`", stringify!($get), "`](Self::", stringify!($get), ") to the driver default.")]
        pub fn $reset(&self) -> $crate::error::Result<()> {
            static RESET: ::nidaqmx_sys::FunctionCache<::nidaqmx_sys::ResetChanAttrFn> =
                ::nidaqmx_sys::FunctionCache::new(concat!("DAQmxReset", $base));
            $crate::channels::attr::reset(&RESET, self.task, &self.name)
        }
    };
}

macro_rules! chan_attr_string_ro {
    ($(#[$doc:meta])* $get:ident, $base:literal) => {
        $(#[$doc])*
        pub fn $get(&self) -> $crate::error::Result<String> {
            static GET: ::nidaqmx_sys::FunctionCache<::nidaqmx_sys::GetChanAttrStringFn> =
                ::nidaqmx_sys::FunctionCache::new(concat!("DAQmxGet", $base));
            $crate::channels::attr::get_string(&GET, self.task, &self.name)
        }
    };
}

macro_rules! chan_attr_enum {
    ($(#[$doc:meta])* $get:ident, $set:ident, $reset:ident, $ty:ty, $base:literal) => {
        $(#[$doc])*
        pub fn $get(&self) -> $crate::error::Result<$ty> {
            static GET: ::nidaqmx_sys::FunctionCache<::nidaqmx_sys::GetChanAttrI32Fn> =
                ::nidaqmx_sys::FunctionCache::new(concat!("DAQmxGet", $base));
            let raw = $crate::channels::attr::get_i32(&GET, self.task, &self.name)?;
            <$ty>::from_raw(raw).ok_or($crate::error::DaqmxError::UnknownAttributeValue {
                symbol: concat!("DAQmxGet", $base),
                value: raw,
            })
        }

        #[doc = concat!("Sets [`", stringify!($get), "`](Self::", stringify!($get), ").")]
        pub fn $set(&self, value: $ty) -> $crate::error::Result<()> {
            static SET: ::nidaqmx_sys::FunctionCache<::nidaqmx_sys::SetChanAttrI32Fn> =
                ::nidaqmx_sys::FunctionCache::new(concat!("DAQmxSet", $base));
            $crate::channels::attr::set_i32(&SET, self.task, &self.name, value.to_raw())
        }

        #[doc = concat!("Resets [`", stringify!($get), "`](Self::", stringify!($get), ") to the driver default.")]
        pub fn $reset(&self) -> $crate::error::Result<()> {
            static RESET: ::nidaqmx_sys::FunctionCache<::nidaqmx_sys::ResetChanAttrFn> =
                ::nidaqmx_sys::FunctionCache::new(concat!("DAQmxReset", $base));
            $crate::channels::attr::reset(&RESET, self.task, &self.name)
        }
    };
}

macro_rules! chan_attr_enum_ro {
    ($(#[$doc:meta])* $get:ident, $ty:ty, $base:literal) => {
        $(#[$doc])*
        pub fn $get(&self) -> $crate::error::Result<$ty> {
            static GET: ::nidaqmx_sys::FunctionCache<::nidaqmx_sys::GetChanAttrI32Fn> =
                ::nidaqmx_sys::FunctionCache::new(concat!("DAQmxGet", $base));
            let raw = $crate::channels::attr::get_i32(&GET, self.task, &self.name)?;
            <$ty>::from_raw(raw).ok_or($crate::error::DaqmxError::UnknownAttributeValue {
                symbol: concat!("DAQmxGet", $base),
                value: raw,
            })
        }
    };
}

macro_rules! chan_attr_f64_array_ro {
    ($(#[$doc:meta])* $get:ident, $base:literal) => {
        $(#[$doc])*
        pub fn $get(&self) -> $crate::error::Result<Vec<f64>> {
            static GET: ::nidaqmx_sys::FunctionCache<::nidaqmx_sys::GetChanAttrF64ArrayFn> =
                ::nidaqmx_sys::FunctionCache::new(concat!("DAQmxGet", $base));
            $crate::channels::attr::get_f64_array(&GET, self.task, &self.name)
        }
    };
}

macro_rules! chan_attr_scale {
    ($(#[$doc:meta])* $get:ident, $set:ident, $reset:ident, $base:literal) => {
        $(#[$doc])*
        pub fn $get(&self) -> $crate::error::Result<$crate::scale::Scale> {
            static GET: ::nidaqmx_sys::FunctionCache<::nidaqmx_sys::GetChanAttrStringFn> =
                ::nidaqmx_sys::FunctionCache::new(concat!("DAQmxGet", $base));
            let name = $crate::channels::attr::get_string(&GET, self.task, &self.name)?;
            Ok($crate::scale::Scale::new(name))
        }

        #[doc = concat!("Sets [`", stringify!($get), "`](Self::", stringify!($get), ").")]
        pub fn $set(&self, value: &$crate::scale::Scale) -> $crate::error::Result<()> {
            static SET: ::nidaqmx_sys::FunctionCache<::nidaqmx_sys::SetChanAttrStringFn> =
                ::nidaqmx_sys::FunctionCache::new(concat!("DAQmxSet", $base));
            $crate::channels::attr::set_string(&SET, self.task, &self.name, value.name())
        }

        #[doc = concat!("Resets [`", stringify!($get), "`](Self::", stringify!($get), ") to the driver default.")]
        pub fn $reset(&self) -> $crate::error::Result<()> {
            static RESET: ::nidaqmx_sys::FunctionCache<::nidaqmx_sys::ResetChanAttrFn> =
                ::nidaqmx_sys::FunctionCache::new(concat!("DAQmxReset", $base));
            $crate::channels::attr::reset(&RESET, self.task, &self.name)
        }
    };
}

pub(crate) use {
    chan_attr_bool, chan_attr_bool_ro, chan_attr_enum, chan_attr_enum_ro, chan_attr_f64,
    chan_attr_f64_array_ro, chan_attr_f64_ro, chan_attr_scale, chan_attr_string,
    chan_attr_string_ro, chan_attr_u32, chan_attr_u32_ro,
};
