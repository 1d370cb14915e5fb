// ============================================================================
// FOUNDATIONAL KINDS
// ============================================================================
//
// These traits say *which* compiled class a Rust type stands for,
// not what the class contains.
//

///
/// Path
/// Fully-qualified class name of the type a Rust marker stands for.
///

pub trait Path {
    const PATH: &'static str;
}

/// Marker for every type that can be turned into a class token.
pub trait ClassKind: Path + 'static {}
impl<T> ClassKind for T where T: Path + 'static {}
