//! Name tables used by the rules

use phf::{phf_map, phf_set};

/// Array methods that mutate their receiver in place.
pub static ARRAY_MUTATOR_METHODS: phf::Set<&'static str> = phf_set! {
    "copyWithin",
    "fill",
    "pop",
    "push",
    "reverse",
    "shift",
    "sort",
    "splice",
    "unshift",
};

/// Array methods that always return a fresh array.
pub static NEW_ARRAY_METHODS: phf::Set<&'static str> = phf_set! {
    "concat",
    "filter",
    "flat",
    "flatMap",
    "map",
    "slice",
    "toReversed",
    "toSorted",
    "toSpliced",
    "with",
};

/// Static `Array`/`Object` functions that return a fresh array.
pub static NEW_ARRAY_FUNCTIONS: phf::Set<&'static str> = phf_set! {
    "Array.from",
    "Array.of",
    "Object.entries",
    "Object.keys",
    "Object.values",
};

/// `Object.*` functions that mutate their first argument.
pub static OBJECT_MUTATOR_FUNCTIONS: phf::Set<&'static str> = phf_set! {
    "assign",
    "defineProperties",
    "defineProperty",
    "setPrototypeOf",
};

/// Mutable collection type names and their readonly counterparts.
pub static READONLY_COLLECTIONS: phf::Map<&'static str, &'static str> = phf_map! {
    "Array" => "ReadonlyArray",
    "Map" => "ReadonlyMap",
    "Set" => "ReadonlySet",
};

/// Get the readonly replacement for a mutable collection type name
pub fn readonly_collection(name: &str) -> Option<&'static str> {
    READONLY_COLLECTIONS.get(name).copied()
}
