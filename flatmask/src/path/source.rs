//! The read-only path source capability.

/// Anything that can list its current paths.
///
/// This is the only thing the reducer asks of its input. Mask types a host
/// system already has can implement it by handing out their path list.
///
/// An absent source (`None`) lists no paths.
///
/// # Examples
///
/// ```
/// use flatmask::PathSource;
///
/// let paths = vec!["a.b".to_string(), "c".to_string()];
/// assert_eq!(paths.paths().len(), 2);
///
/// let absent: Option<Vec<String>> = None;
/// assert!(absent.paths().is_empty());
/// ```
pub trait PathSource {
    /// Returns the current ordered list of paths.
    fn paths(&self) -> &[String];
}

impl PathSource for [String] {
    fn paths(&self) -> &[String] {
        self
    }
}

impl<const N: usize> PathSource for [String; N] {
    fn paths(&self) -> &[String] {
        self
    }
}

impl PathSource for Vec<String> {
    fn paths(&self) -> &[String] {
        self
    }
}

impl<T: PathSource> PathSource for Option<T> {
    fn paths(&self) -> &[String] {
        match self {
            Some(source) => source.paths(),
            None => &[],
        }
    }
}

impl<T: PathSource + ?Sized> PathSource for &T {
    fn paths(&self) -> &[String] {
        (**self).paths()
    }
}

impl<T: PathSource + ?Sized> PathSource for Box<T> {
    fn paths(&self) -> &[String] {
        (**self).paths()
    }
}
