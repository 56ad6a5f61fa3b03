//! Macros para declarar Steps sin boilerplate.
//!
//! Exportadas en la raíz del crate:
//!   use rails_core::{rails_step, steps};

/// Declara un tipo de step y sus miembros.
///
/// Cada `fn nombre(scope) { ... }` se genera como función asociada que recibe
/// `&mut StepScope` y devuelve `Result<(), RailsError>`. Sólo los miembros
/// con prefijo `step_` son operaciones; el resto quedan como helpers
/// invocables desde las operaciones (`Self::helper(scope)`).
///
/// La lista de operaciones se calcula una vez por tipo, en el orden en que
/// se declaran los miembros.
///
/// ```ignore
/// rails_step! {
///     pub struct Increment;
///     fn step_setup(scope) { scope.dbx.put("data", 0); Ok(()) }
///     fn step_one(scope) { Self::bump(scope, 1) }
/// }
///
/// // herencia: operaciones del base primero, luego las propias
/// rails_step! {
///     pub struct IncrementTwice: Increment;
///     fn step_again(scope) { Increment::step_one(scope) }
/// }
/// ```
#[macro_export]
macro_rules! rails_step {
    (@discover $declared:ident) => {
        $crate::step::OperationList::discover($declared)
    };
    (@discover $declared:ident, $base:ty) => {
        $crate::step::OperationList::inherit(<$base as $crate::step::Step>::operations(), $declared)
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident $(: $base:ty)?;
        $(
            $(#[$fmeta:meta])*
            fn $member:ident($scope:ident) $body:block
        )*
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        $vis struct $name;

        #[allow(dead_code)]
        impl $name {
            $(
                $(#[$fmeta])*
                pub fn $member($scope: &mut $crate::step::StepScope<'_>) -> ::std::result::Result<(), $crate::errors::RailsError> $body
            )*
        }

        impl $crate::step::Step for $name {
            const NAME: &'static str = stringify!($name);

            fn operations() -> &'static $crate::step::OperationList {
                static OPERATIONS: $crate::__private::Lazy<$crate::step::OperationList> =
                    $crate::__private::Lazy::new(|| {
                        let declared: &[(&'static str, $crate::step::OperationFn)] = &[
                            $( (stringify!($member), $name::$member as $crate::step::OperationFn) ),*
                        ];
                        $crate::rails_step!(@discover declared $(, $base)?)
                    });
                &OPERATIONS
            }
        }
    };
}

/// Construye la secuencia de `StepType` para un runner: `steps![Load, Clean]`.
#[macro_export]
macro_rules! steps {
    ($($step:ty),* $(,)?) => {
        vec![$($crate::step::StepType::of::<$step>()),*]
    };
}
