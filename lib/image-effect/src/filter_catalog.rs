use crate::{ImageEffectError, ImageEffectResult, Kernel};
use std::{fmt, str::FromStr};
use strum::VariantArray as _;
use strum_macros::{EnumString, VariantArray};

#[rustfmt::skip]
const BLUR: [i32; 25] = [
    1, 1, 1, 1, 1,
    1, 0, 0, 0, 1,
    1, 0, 0, 0, 1,
    1, 0, 0, 0, 1,
    1, 1, 1, 1, 1,
];

const CONTOUR: [i32; 9] = [-1, -1, -1, -1, 8, -1, -1, -1, -1];
const DETAIL: [i32; 9] = [0, -1, 0, -1, 10, -1, 0, -1, 0];
const EDGE_ENHANCE: [i32; 9] = [-1, -1, -1, -1, 10, -1, -1, -1, -1];
const EMBOSS: [i32; 9] = [-1, 0, 0, 0, 1, 0, 0, 0, 0];
const SHARPEN: [i32; 9] = [-2, -2, -2, -2, 32, -2, -2, -2, -2];
const SMOOTH: [i32; 9] = [1, 1, 1, 1, 5, 1, 1, 1, 1];

/// The closed set of filters offered to users, in presentation order.
#[derive(VariantArray, EnumString, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterName {
    #[strum(serialize = "blur")]
    Blur,
    #[strum(serialize = "contour")]
    Contour,
    #[strum(serialize = "detail")]
    Detail,
    #[strum(serialize = "edge enhance")]
    EdgeEnhance,
    #[strum(serialize = "emboss")]
    Emboss,
    #[strum(serialize = "sharpen")]
    Sharpen,
    #[strum(serialize = "smooth")]
    Smooth,
}

impl FilterName {
    pub fn all_names() -> Vec<&'static str> {
        FilterName::VARIANTS.iter().map(|f| f.as_str()).collect()
    }

    /// Membership check without touching any image data.
    pub fn lookup(name: &str) -> Option<Self> {
        Self::from_str(name).ok()
    }

    pub fn try_from_name(name: &str) -> ImageEffectResult<Self> {
        Self::lookup(name).ok_or_else(|| ImageEffectError::FilterNotFound(name.to_string()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blur => "blur",
            Self::Contour => "contour",
            Self::Detail => "detail",
            Self::EdgeEnhance => "edge enhance",
            Self::Emboss => "emboss",
            Self::Sharpen => "sharpen",
            Self::Smooth => "smooth",
        }
    }

    pub fn kernel(&self) -> Kernel {
        match self {
            Self::Blur => Kernel::new(5, &BLUR, 16, 0),
            Self::Contour => Kernel::new(3, &CONTOUR, 1, 255),
            Self::Detail => Kernel::new(3, &DETAIL, 6, 0),
            Self::EdgeEnhance => Kernel::new(3, &EDGE_ENHANCE, 2, 0),
            Self::Emboss => Kernel::new(3, &EMBOSS, 1, 128),
            Self::Sharpen => Kernel::new(3, &SHARPEN, 16, 0),
            Self::Smooth => Kernel::new(3, &SMOOTH, 13, 0),
        }
    }
}

impl fmt::Display for FilterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_name_resolves() {
        for name in FilterName::all_names() {
            let filter = FilterName::lookup(name).unwrap();
            assert_eq!(filter.as_str(), name);
            assert_eq!(filter.to_string(), name);
        }
    }

    #[test]
    fn test_names_keep_presentation_order() {
        assert_eq!(
            FilterName::all_names(),
            vec![
                "blur",
                "contour",
                "detail",
                "edge enhance",
                "emboss",
                "sharpen",
                "smooth"
            ]
        );
    }

    #[test]
    fn test_unknown_names_are_rejected() {
        for name in ["", "Blur", "edge_enhance", "edge-enhance", "sepia", " blur"] {
            assert!(FilterName::lookup(name).is_none(), "{name:?} should not resolve");
            assert!(matches!(
                FilterName::try_from_name(name),
                Err(ImageEffectError::FilterNotFound(n)) if n == name
            ));
        }
    }

    #[test]
    fn test_kernels_are_square() {
        for filter in FilterName::VARIANTS {
            let kernel = filter.kernel();
            assert_eq!(kernel.weights().len(), (kernel.size() * kernel.size()) as usize);
            assert_eq!(kernel.size() % 2, 1);
        }
    }
}
