/// Boxed newtype error plus an extension trait whose `bx()` wraps any
/// foreign error into it, so call sites can write `.bx()?`.
macro_rules! error_template {
    ($name:ident, $ext:ident) => {
        use std::error::Error;
        use std::fmt;

        #[derive(Debug)]
        pub struct $name(Box<dyn Error + Sync + Send>);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{} ( {} )", stringify!($name), self.0)
            }
        }

        impl Error for $name {
            fn source(&self) -> Option<&(dyn Error + 'static)> {
                Some(self.0.as_ref())
            }
        }

        pub trait $ext<T> {
            fn bx(self) -> Result<T, $name>;
        }

        impl<T, E> $ext<T> for Result<T, E>
        where
            E: Error + Send + Sync + 'static,
        {
            fn bx(self) -> Result<T, $name> {
                self.map_err(|err| $name(Box::new(err)))
            }
        }
    };
}

/// Field-less error carrying only its own name.
macro_rules! error_unit {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name;

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str(stringify!($name))
            }
        }

        impl std::error::Error for $name {}
    };
}

pub(crate) use error_template;
pub(crate) use error_unit;

#[cfg(test)]
mod tests {
    mod sample {
        crate::error::error_template!(SampleError, SampleResultExt);
        crate::error::error_unit!(Empty);
    }

    use sample::{Empty, SampleResultExt};
    use std::error::Error;

    #[test]
    fn wraps_and_displays_source() {
        let res: Result<(), Empty> = Err(Empty);
        let err = res.bx().unwrap_err();
        assert_eq!(err.to_string(), "SampleError ( Empty )");
        assert_eq!(err.source().unwrap().to_string(), "Empty");
    }

    #[test]
    fn passes_ok_through() {
        let res: Result<u8, Empty> = Ok(7);
        assert_eq!(res.bx().unwrap(), 7);
    }
}
