use alloc::string::String;
use core::any::type_name_of_val;

use crate::info::ExposureKind;

mod model {
    use alloc::string::String;

    pub struct A {
        m_i: i32,
        m_ci: i32,
        label: String,
    }

    impl A {
        pub fn new() -> Self {
            A {
                m_i: 3,
                m_ci: 7,
                label: String::from("a"),
            }
        }

        pub fn get_m_i(&self) -> i32 {
            self.m_i
        }

        pub fn get_m_ci(&self) -> i32 {
            self.m_ci
        }
    }

    pub struct Pair(u8, u8);

    impl Pair {
        pub fn sum(&self) -> u16 {
            u16::from(self.0) + u16::from(self.1)
        }
    }

    pub fn pair() -> Pair {
        Pair(1, 2)
    }

    crate::friends! {
        pub mod friend for A {
            field m_i: i32;
            field const m_ci: i32;
            /// The label, for renaming in tests.
            field mut label: String;
        }

        pub mod pair_friend for Pair {
            field 0: u8 as first;
            field const 1: u8 as second;
        }
    }

    #[test]
    fn retrieval_is_constant() {
        use crate::retrieve;

        let a = A::new();
        let first = retrieve(friend::tag::A_m_i_0);
        let second = retrieve(friend::tag::A_m_i_0::default());
        assert!(core::ptr::eq(first.get(&a), second.get(&a)));
        assert!(core::ptr::eq(first.get(&a), &a.m_i));
    }
}

use model::{A, friend, pair_friend};

#[test]
fn mutation_is_seen_by_owner() {
    let mut a = A::new();

    let i = friend::m_i(&mut a);
    assert_eq!(*i, 3);
    *i += 1;
    assert_eq!(a.get_m_i(), 4);
}

#[test]
fn temporary_owner() {
    let i = *friend::m_i(&A::new());
    assert_eq!(i, 3);
}

#[test]
fn shared_source_yields_shared_reference() {
    let mut a = A::new();

    let shared = friend::m_i(&a);
    assert_eq!(type_name_of_val(&shared), "&i32");

    let unique = friend::m_i(&mut a);
    assert_eq!(type_name_of_val(&unique), "&mut i32");
}

#[test]
fn read_only_field_never_yields_mut() {
    let mut a = A::new();

    let from_mut = friend::m_ci(&mut a);
    assert_eq!(type_name_of_val(&from_mut), "&i32");
    assert_eq!(*from_mut, 7);
    assert_eq!(*friend::m_ci(&a), a.get_m_ci());
}

#[test]
fn non_copy_field() {
    let mut a = A::new();

    friend::label(&mut a).push_str("bc");
    assert_eq!(friend::label(&a), "abc");

    let taken: String = core::mem::take(friend::label(&mut a));
    assert_eq!(taken, "abc");
    assert!(friend::label(&a).is_empty());
}

#[test]
fn tuple_fields() {
    let mut pair = model::pair();

    *pair_friend::first(&mut pair) = 9;
    assert_eq!(*pair_friend::second(&mut pair), 2);
    assert_eq!(pair.sum(), 11);
}

#[test]
fn exposures_are_listed() {
    let kinds: alloc::vec::Vec<_> = friend::EXPOSURES.iter().map(|info| info.kind).collect();
    assert_eq!(
        kinds,
        [ExposureKind::Field, ExposureKind::ConstField, ExposureKind::Field]
    );

    let first = &friend::EXPOSURES[0];
    assert_eq!(first.owner, "A");
    assert_eq!(first.member, "m_i");
    assert_eq!(first.accessor, "m_i");
    assert!(first.module_path.ends_with("tests::field::model::friend"));

    let second = &pair_friend::EXPOSURES[1];
    assert_eq!(second.member, "1");
    assert_eq!(second.accessor, "second");
}
