use std::{
    f64::consts::{E, PI},
    fmt,
};

use crate::ast::NumericType;

/// Type alias for builtin function handlers.
///
/// A builtin receives the evaluated arguments in source order. The analysis
/// pass guarantees the argument count matches the declared arity.
pub type BuiltinFn = fn(&[f64]) -> f64;

/// A builtin function: its name, its fixed arity and its implementation.
pub struct Builtin {
    /// The name the function is called by.
    pub name:  &'static str,
    /// The exact number of arguments the function takes.
    pub arity: usize,
    /// The implementation.
    pub func:  BuiltinFn,
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builtin")
         .field("name", &self.name)
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}

/// Builtins are identified by name.
impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Builtin {}

/// A named constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantDef {
    /// The canonical name, used when rendering.
    pub name:         &'static str,
    /// The value.
    pub value:        f64,
    /// The type the constant contributes to analysis.
    pub numeric_type: NumericType,
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an exact arity,
/// - a function pointer implementing the builtin.
///
/// The macro produces `BUILTIN_TABLE`, the static table behind
/// [`lookup_function`].
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

/// Generates a one-argument builtin that applies an `f64` method.
macro_rules! unary_builtin {
    ($fname:ident, $real_fn:ident) => {
        fn $fname(args: &[f64]) -> f64 {
            argument(args, 0).$real_fn()
        }
    };
}

unary_builtin!(sqrt, sqrt);
unary_builtin!(log10, log10);
unary_builtin!(log2, log2);
unary_builtin!(ln, ln);
unary_builtin!(sin, sin);
unary_builtin!(cos, cos);
unary_builtin!(tan, tan);
unary_builtin!(asin, asin);
unary_builtin!(acos, acos);
unary_builtin!(atan, atan);
unary_builtin!(abs, abs);
unary_builtin!(radians, to_radians);
unary_builtin!(degrees, to_degrees);
unary_builtin!(round, round);
unary_builtin!(floor, floor);
unary_builtin!(ceil, ceil);

fn pow(args: &[f64]) -> f64 {
    argument(args, 0).powf(argument(args, 1))
}

builtin_functions! {
    "sqrt"  => { arity: 1, func: sqrt },
    "log"   => { arity: 1, func: log10 },
    "log10" => { arity: 1, func: log10 },
    "log2"  => { arity: 1, func: log2 },
    "pow"   => { arity: 2, func: pow },
    "sin"   => { arity: 1, func: sin },
    "cos"   => { arity: 1, func: cos },
    "tan"   => { arity: 1, func: tan },
    "asin"  => { arity: 1, func: asin },
    "acos"  => { arity: 1, func: acos },
    "atan"  => { arity: 1, func: atan },
    "ln"    => { arity: 1, func: ln },
    "abs"   => { arity: 1, func: abs },
    "rad"   => { arity: 1, func: radians },
    "deg"   => { arity: 1, func: degrees },
    "round" => { arity: 1, func: round },
    "floor" => { arity: 1, func: floor },
    "ceil"  => { arity: 1, func: ceil },
}

static CONSTANT_TABLE: &[(&str, ConstantDef)] = &[("pi", PI_CONSTANT),
                                                  ("π", PI_CONSTANT),
                                                  ("e", ConstantDef { name:         "e",
                                                                      value:        E,
                                                                      numeric_type: NumericType::Float, })];

const PI_CONSTANT: ConstantDef = ConstantDef { name:         "pi",
                                               value:        PI,
                                               numeric_type: NumericType::Float, };

/// Looks up a builtin function by name.
///
/// ## Example
/// ```
/// use reckon::interpreter::builtin::lookup_function;
///
/// let pow = lookup_function("pow").unwrap();
/// assert_eq!(pow.arity, 2);
/// assert_eq!((pow.func)(&[2.0, 10.0]), 1024.0);
/// assert!(lookup_function("sinh").is_none());
/// ```
#[must_use]
pub fn lookup_function(name: &str) -> Option<&'static Builtin> {
    BUILTIN_TABLE.iter().find(|builtin| builtin.name == name)
}

/// Looks up a named constant. `π` is accepted as an alias of `pi`.
///
/// ## Example
/// ```
/// use reckon::interpreter::builtin::lookup_constant;
///
/// assert_eq!(lookup_constant("π").unwrap().name, "pi");
/// assert!(lookup_constant("tau").is_none());
/// ```
#[must_use]
pub fn lookup_constant(name: &str) -> Option<ConstantDef> {
    CONSTANT_TABLE.iter()
                  .find(|(alias, _)| *alias == name)
                  .map(|(_, constant)| *constant)
}

/// Fetches an argument, yielding `NaN` when it is missing.
fn argument(args: &[f64], index: usize) -> f64 {
    args.get(index).copied().unwrap_or(f64::NAN)
}
