//! The `tree!` constructor macro.

/// Build a [`Seq`](crate::Seq) from a bracketed element list, `vec!`-style.
///
/// Nested bracket groups become nested sequences; everything else goes
/// through `Value::from`. `null` is spelled literally.
///
/// ```
/// use arbex_core::tree;
///
/// let t = tree![1, 2, ["a", ["b", "c"]], null];
/// assert_eq!(t.len(), 4);
/// ```
#[macro_export]
macro_rules! tree {
    ($($tt:tt)*) => {
        $crate::Seq::from_vec($crate::tree_elements!(@vec [] $($tt)*))
    };
}

/// Internal tt-muncher behind [`tree!`]. Accumulates finished element
/// expressions in a bracketed list until the input is exhausted.
#[doc(hidden)]
#[macro_export]
macro_rules! tree_elements {
    // Done: materialize the accumulated elements.
    (@vec [$($out:expr,)*]) => {
        ::std::vec![$($out,)*]
    };

    // Next element is a nested sequence.
    (@vec [$($out:expr,)*] [$($inner:tt)*] , $($rest:tt)*) => {
        $crate::tree_elements!(@vec [$($out,)* $crate::Value::Seq($crate::tree![$($inner)*]),] $($rest)*)
    };
    (@vec [$($out:expr,)*] [$($inner:tt)*]) => {
        $crate::tree_elements!(@vec [$($out,)* $crate::Value::Seq($crate::tree![$($inner)*]),])
    };

    // Next element is the null literal.
    (@vec [$($out:expr,)*] null , $($rest:tt)*) => {
        $crate::tree_elements!(@vec [$($out,)* $crate::Value::Null,] $($rest)*)
    };
    (@vec [$($out:expr,)*] null) => {
        $crate::tree_elements!(@vec [$($out,)* $crate::Value::Null,])
    };

    // Next element is an arbitrary scalar expression.
    (@vec [$($out:expr,)*] $next:expr , $($rest:tt)*) => {
        $crate::tree_elements!(@vec [$($out,)* $crate::Value::from($next),] $($rest)*)
    };
    (@vec [$($out:expr,)*] $next:expr) => {
        $crate::tree_elements!(@vec [$($out,)* $crate::Value::from($next),])
    };
}
