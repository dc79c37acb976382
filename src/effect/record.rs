//! Accumulated records for do-notation style task pipelines.
//!
//! A record is a type-level list of named fields, grown one field at a time
//! by [`Task::bind`](crate::effect::Task::bind) and
//! [`Task::ap_s`](crate::effect::Task::ap_s), starting from the empty
//! [`RecordNil`]. Field names are zero-sized marker types implementing
//! [`FieldName`], usually declared with [`field_names!`](crate::field_names).
//!
//! # Index Pattern
//!
//! Looking a field up uses the index pattern: the position of a field in the
//! list is encoded as a type,
//!
//! - [`Here`] - The field is the head of the record
//! - [`There<I>`] - The field is in the tail, at index `I`
//!
//! and the compiler infers the index. A name that occurs twice has two valid
//! indices, so inference fails. Inserting a field therefore requires the
//! index of the new name to be unique, which rejects a second insertion of
//! the same name at compile time:
//!
//! ```rust
//! use thenable::effect::record::{Record, RecordNil};
//!
//! thenable::field_names!(Count, Label);
//!
//! let record = RecordNil.insert(Count, 3).insert(Label, "three");
//! assert_eq!(*record.get(Count), 3);
//! assert_eq!(*record.get(Label), "three");
//! ```
//!
//! ```rust,compile_fail
//! use thenable::effect::record::{Record, RecordNil};
//!
//! thenable::field_names!(Count);
//!
//! let record = RecordNil.insert(Count, 3).insert(Count, 4);
//! ```

use std::fmt;
use std::marker::PhantomData;

/// A zero-sized type naming a record field.
pub trait FieldName {
    /// The field name used when a record is formatted.
    const NAME: &'static str;
}

/// Declares field-name marker types.
///
/// Each identifier becomes a unit struct implementing [`FieldName`], with the
/// identifier itself as its name.
///
/// # Examples
///
/// ```rust
/// use thenable::effect::record::FieldName;
///
/// thenable::field_names!(pub User, Orders);
///
/// assert_eq!(User::NAME, "User");
/// assert_eq!(Orders::NAME, "Orders");
/// ```
#[macro_export]
macro_rules! field_names {
    ($($visibility:vis $name:ident),+ $(,)?) => {
        $(
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            $visibility struct $name;

            impl $crate::effect::record::FieldName for $name {
                const NAME: &'static str = stringify!($name);
            }
        )+
    };
}

/// Index indicating the field is at the head of the record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Here;

/// Index indicating the field is in the tail of the record, at index `I`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct There<I>(PhantomData<I>);

/// The empty record. Every accumulation starts here.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RecordNil;

/// A record with field `N` holding a `V`, followed by the fields in `Tail`.
///
/// The most recently added field is the head.
pub struct RecordCons<N, V, Tail> {
    value: V,
    tail: Tail,
    name: PhantomData<fn() -> N>,
}

impl<N, V, Tail> RecordCons<N, V, Tail> {
    /// Prepends a field without the uniqueness check. Callers must carry a
    /// `Has<N, I>` bound for the resulting record.
    pub(crate) const fn new(value: V, tail: Tail) -> Self {
        Self {
            value,
            tail,
            name: PhantomData,
        }
    }

    /// Returns a reference to the field named `name`.
    ///
    /// The index `I` is inferred; it only resolves when `name` occurs
    /// exactly once.
    #[inline]
    pub fn get<M, I>(&self, _name: M) -> &<Self as Has<M, I>>::Value
    where
        Self: Has<M, I>,
    {
        self.field()
    }

    /// Consumes the record, returning the field named `name`.
    #[inline]
    pub fn take<M, I>(self, _name: M) -> <Self as Has<M, I>>::Value
    where
        Self: Has<M, I>,
    {
        self.into_field()
    }
}

/// Proof that a record holds the field `N` at index `I`.
pub trait Has<N, I> {
    /// The type stored under `N`.
    type Value;

    /// Borrows the field.
    fn field(&self) -> &Self::Value;

    /// Consumes the record and returns the field.
    fn into_field(self) -> Self::Value;
}

impl<N, V, Tail> Has<N, Here> for RecordCons<N, V, Tail> {
    type Value = V;

    #[inline]
    fn field(&self) -> &V {
        &self.value
    }

    #[inline]
    fn into_field(self) -> V {
        self.value
    }
}

impl<N, M, V, Tail, I> Has<N, There<I>> for RecordCons<M, V, Tail>
where
    Tail: Has<N, I>,
{
    type Value = Tail::Value;

    #[inline]
    fn field(&self) -> &Self::Value {
        self.tail.field()
    }

    #[inline]
    fn into_field(self) -> Self::Value {
        self.tail.into_field()
    }
}

/// A well-formed accumulated record: [`RecordNil`] or a [`RecordCons`] of
/// named fields.
pub trait Record: Sized {
    /// The number of fields.
    const LEN: usize;

    /// Appends the field names, oldest first.
    fn collect_names(names: &mut Vec<&'static str>);

    /// Returns the field names in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thenable::effect::record::{Record, RecordCons, RecordNil};
    ///
    /// thenable::field_names!(First, Second);
    ///
    /// type Pair = RecordCons<Second, i32, RecordCons<First, i32, RecordNil>>;
    /// assert_eq!(Pair::field_names(), vec!["First", "Second"]);
    /// ```
    #[must_use]
    fn field_names() -> Vec<&'static str> {
        let mut names = Vec::with_capacity(Self::LEN);
        Self::collect_names(&mut names);
        names
    }

    /// Adds the field `name` with `value`.
    ///
    /// Fails to compile when the record already holds `name`.
    #[inline]
    fn insert<N, V, I>(self, _name: N, value: V) -> RecordCons<N, V, Self>
    where
        N: FieldName,
        RecordCons<N, V, Self>: Has<N, I>,
    {
        RecordCons::new(value, self)
    }
}

impl Record for RecordNil {
    const LEN: usize = 0;

    fn collect_names(_names: &mut Vec<&'static str>) {}
}

impl<N: FieldName, V, Tail: Record> Record for RecordCons<N, V, Tail> {
    const LEN: usize = Tail::LEN + 1;

    fn collect_names(names: &mut Vec<&'static str>) {
        Tail::collect_names(names);
        names.push(N::NAME);
    }
}

// =============================================================================
// Structural trait implementations
// =============================================================================

impl<N, V: Clone, Tail: Clone> Clone for RecordCons<N, V, Tail> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone(), self.tail.clone())
    }
}

impl<N, V: PartialEq, Tail: PartialEq> PartialEq for RecordCons<N, V, Tail> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.tail == other.tail
    }
}

impl<N, V: Eq, Tail: Eq> Eq for RecordCons<N, V, Tail> {}

mod sealed {
    /// Writes record fields into a `debug_map`, oldest first.
    pub trait DebugFields {
        fn debug_fields(&self, map: &mut std::fmt::DebugMap<'_, '_>);
    }
}

use sealed::DebugFields;

impl DebugFields for RecordNil {
    fn debug_fields(&self, _map: &mut fmt::DebugMap<'_, '_>) {}
}

impl<N: FieldName, V: fmt::Debug, Tail: DebugFields> DebugFields for RecordCons<N, V, Tail> {
    fn debug_fields(&self, map: &mut fmt::DebugMap<'_, '_>) {
        self.tail.debug_fields(map);
        map.key(&format_args!("{}", N::NAME)).value(&self.value);
    }
}

impl fmt::Debug for RecordNil {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().finish()
    }
}

impl<N: FieldName, V: fmt::Debug, Tail: DebugFields> fmt::Debug for RecordCons<N, V, Tail> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = formatter.debug_map();
        self.debug_fields(&mut map);
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    crate::field_names!(Alpha, Beta, Gamma);

    #[rstest]
    fn empty_record_has_no_fields() {
        assert_eq!(RecordNil::LEN, 0);
        assert!(RecordNil::field_names().is_empty());
        assert_eq!(format!("{RecordNil:?}"), "{}");
    }

    #[rstest]
    fn insert_then_get_each_field() {
        let record = RecordNil.insert(Alpha, 1).insert(Beta, "two").insert(Gamma, 3.0_f64);
        assert_eq!(*record.get(Alpha), 1);
        assert_eq!(*record.get(Beta), "two");
        assert!((*record.get(Gamma) - 3.0).abs() < f64::EPSILON);
    }

    #[rstest]
    fn field_names_follow_insertion_order() {
        let record = RecordNil.insert(Beta, ()).insert(Alpha, ());
        fn names_of<R: Record>(_record: &R) -> Vec<&'static str> {
            R::field_names()
        }
        assert_eq!(names_of(&record), vec!["Beta", "Alpha"]);
    }

    #[rstest]
    fn take_moves_the_field_out() {
        let record = RecordNil.insert(Alpha, String::from("owned")).insert(Beta, 2);
        assert_eq!(record.take(Alpha), "owned");
    }

    #[rstest]
    fn debug_prints_fields_oldest_first() {
        let record = RecordNil.insert(Alpha, 1).insert(Beta, 2);
        assert_eq!(format!("{record:?}"), "{Alpha: 1, Beta: 2}");
    }

    #[rstest]
    fn records_compare_structurally() {
        let first = RecordNil.insert(Alpha, 1).insert(Beta, 2);
        let second = first.clone();
        assert_eq!(first, second);
        assert_ne!(first, RecordNil.insert(Alpha, 1).insert(Beta, 3));
    }
}
