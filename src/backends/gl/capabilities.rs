use gl;
use gl::types::*;

use std::cmp;
use std::ffi;

use crate::errors::{Error, Result};

/// Describes a version.
///
/// A version can only be compared to another version if they belong to the
/// same API. For example, both `Version::GL(3, 0) >= Version::ES(3, 0)` and
/// `Version::ES(3, 0) >= Version::GL(3, 0)` return `false`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Version {
    /// Regular OpenGL.
    GL(u8, u8),
    /// OpenGL embedded system.
    ES(u8, u8),
}

impl PartialOrd for Version {
    #[inline]
    fn partial_cmp(&self, other: &Version) -> Option<cmp::Ordering> {
        let (es1, major1, minor1) = match *self {
            Version::GL(major, minor) => (false, major, minor),
            Version::ES(major, minor) => (true, major, minor),
        };

        let (es2, major2, minor2) = match *other {
            Version::GL(major, minor) => (false, major, minor),
            Version::ES(major, minor) => (true, major, minor),
        };

        if es1 != es2 {
            None
        } else {
            match major1.cmp(&major2) {
                cmp::Ordering::Equal => Some(minor1.cmp(&minor2)),
                v => Some(v),
            }
        }
    }
}

impl Version {
    /// Obtains the OpenGL version of the current context using the loaded
    /// functions.
    ///
    /// # Safety
    ///
    /// You must ensure that the functions belong to the current context,
    /// otherwise you will get an undefined behavior.
    pub unsafe fn parse() -> Result<Version> {
        let desc = gl::GetString(gl::VERSION);
        let desc = String::from_utf8(ffi::CStr::from_ptr(desc as *const _).to_bytes().to_vec())
            .map_err(|_| Error::Backend("Version string is unformatted.".into()))?;

        let (es, desc) = if desc.starts_with("OpenGL ES ") {
            (true, &desc[10..])
        } else if desc.starts_with("OpenGL ES-") {
            (true, &desc[13..])
        } else {
            (false, &desc[..])
        };

        let desc = desc
            .split(' ')
            .next()
            .ok_or_else(|| Error::Backend("Version string is unformatted.".into()))?;

        let mut iter = desc.split(move |c: char| c == '.');
        let major = iter
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or_else(|| Error::Backend("Version string is unformatted.".into()))?;
        let minor = iter
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or_else(|| Error::Backend("Version string is unformatted.".into()))?;

        if es {
            Ok(Version::ES(major, minor))
        } else {
            Ok(Version::GL(major, minor))
        }
    }
}

macro_rules! extensions {
    ($($string:expr => $field:ident,)+) => {
        /// Contains data about the list of extensions.
        #[derive(Debug, Clone, Copy)]
        pub struct Extensions {
            $(
                pub $field: bool,
            )+
        }

        impl Extensions {
            /// Returns the list of extensions supported by the backend.
            ///
            /// # Safety
            ///
            /// The OpenGL context must be current in the thread and the
            /// version must match the one of the backend.
            pub unsafe fn parse(version: Version) -> Result<Extensions> {
                let strings: Vec<String> = if version >= Version::GL(3, 0)
                    || version >= Version::ES(3, 0)
                {
                    let mut num_extensions = 0;
                    gl::GetIntegerv(gl::NUM_EXTENSIONS, &mut num_extensions);

                    (0..num_extensions as GLuint)
                        .map(|num| {
                            let ext = gl::GetStringi(gl::EXTENSIONS, num);
                            String::from_utf8(
                                ffi::CStr::from_ptr(ext as *const _).to_bytes().to_vec(),
                            )
                            .map_err(|_| {
                                Error::Backend("Extension string is unformatted.".into())
                            })
                        })
                        .collect::<Result<_>>()?
                } else {
                    let list = gl::GetString(gl::EXTENSIONS);
                    if list.is_null() {
                        Vec::new()
                    } else {
                        let list = String::from_utf8(
                            ffi::CStr::from_ptr(list as *const _).to_bytes().to_vec(),
                        )
                        .map_err(|_| Error::Backend("Extension string is unformatted.".into()))?;
                        list.split(' ').map(|v| v.to_string()).collect()
                    }
                };

                let mut extensions = Extensions {
                    $(
                        $field: false,
                    )+
                };

                for extension in strings {
                    match &extension[..] {
                        $(
                            $string => extensions.$field = true,
                        )+
                        _ => {}
                    }
                }

                Ok(extensions)
            }

            /// Every extension present, used by the headless backend.
            pub fn all() -> Extensions {
                Extensions {
                    $(
                        $field: true,
                    )+
                }
            }

            /// No extensions at all.
            pub fn none() -> Extensions {
                Extensions {
                    $(
                        $field: false,
                    )+
                }
            }
        }
    };
}

extensions! {
    "GL_EXT_blend_minmax" => gl_ext_blend_minmax,
    "GL_EXT_blend_subtract" => gl_ext_blend_subtract,
    "GL_EXT_blend_color" => gl_ext_blend_color,
    "GL_EXT_blend_equation_separate" => gl_ext_blend_equation_separate,
    "GL_EXT_blend_func_separate" => gl_ext_blend_func_separate,
    "GL_ARB_imaging" => gl_arb_imaging,
    "GL_ARB_draw_buffers" => gl_arb_draw_buffers,
}

/// The capability flags of a live context: the API version, the extension
/// list and the limits the state objects care about.
#[derive(Debug, Clone, Copy)]
pub struct Capabilities {
    pub version: Version,
    pub extensions: Extensions,
    pub max_draw_buffers: u32,
}

impl Capabilities {
    /// Parses the capabilities of the current context.
    ///
    /// # Safety
    ///
    /// The OpenGL context must be current in the thread.
    pub unsafe fn parse() -> Result<Capabilities> {
        let version = Version::parse()?;
        let extensions = Extensions::parse(version)?;

        let mut max_draw_buffers = 1;
        if version >= Version::GL(2, 0)
            || version >= Version::ES(3, 0)
            || extensions.gl_arb_draw_buffers
        {
            gl::GetIntegerv(gl::MAX_DRAW_BUFFERS, &mut max_draw_buffers);
        }

        Ok(Capabilities {
            version,
            extensions,
            max_draw_buffers: max_draw_buffers as u32,
        })
    }

    /// A capability set with everything available, used by the headless
    /// backend.
    pub fn full() -> Capabilities {
        Capabilities {
            version: Version::GL(4, 5),
            extensions: Extensions::all(),
            max_draw_buffers: 8,
        }
    }

    pub fn supports_separate_blend_equation(&self) -> bool {
        self.version >= Version::GL(2, 0)
            || self.version >= Version::ES(2, 0)
            || self.extensions.gl_ext_blend_equation_separate
    }

    pub fn supports_separate_blend_function(&self) -> bool {
        self.version >= Version::GL(1, 4)
            || self.version >= Version::ES(2, 0)
            || self.extensions.gl_ext_blend_func_separate
    }

    pub fn supports_blend_minmax(&self) -> bool {
        self.version >= Version::GL(1, 4)
            || self.version >= Version::ES(3, 0)
            || self.extensions.gl_ext_blend_minmax
    }

    pub fn supports_blend_color(&self) -> bool {
        self.version >= Version::GL(1, 4)
            || self.version >= Version::ES(2, 0)
            || self.extensions.gl_ext_blend_color
            || self.extensions.gl_arb_imaging
    }

    pub fn supports_draw_buffers(&self) -> bool {
        self.version >= Version::GL(2, 0)
            || self.version >= Version::ES(3, 0)
            || self.extensions.gl_arb_draw_buffers
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn versions() {
        assert!(Version::GL(3, 0) >= Version::GL(2, 1));
        assert!(Version::GL(3, 0) >= Version::GL(3, 0));
        assert!(!(Version::GL(3, 0) >= Version::ES(3, 0)));
        assert!(!(Version::ES(3, 0) >= Version::GL(1, 0)));
        assert!(Version::ES(3, 1) > Version::ES(3, 0));
    }

    #[test]
    fn full_supports_everything() {
        let caps = Capabilities::full();
        assert!(caps.supports_separate_blend_equation());
        assert!(caps.supports_separate_blend_function());
        assert!(caps.supports_blend_minmax());
        assert!(caps.supports_blend_color());
        assert!(caps.supports_draw_buffers());
    }
}
