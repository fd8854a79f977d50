use core::sync::atomic::Ordering;

use crate::info::ExposureKind;

mod model {
    use core::sync::atomic::{AtomicI32, Ordering};

    static S_I: AtomicI32 = AtomicI32::new(404);

    mod limits {
        pub(super) static MAX: u8 = 200;
    }

    pub struct A;

    impl A {
        const S_CI: i32 = 403;

        pub fn get_s_i() -> i32 {
            S_I.load(Ordering::SeqCst)
        }
    }

    crate::friends! {
        pub mod friend for A {
            static S_I: AtomicI32;
            static MAX: u8 = limits::MAX as max;
            const S_CI: i32;
        }
    }
}

use model::{A, friend};

#[test]
fn static_mutation_is_seen_by_owner() {
    let s_i = friend::S_I();
    assert_eq!(s_i.load(Ordering::SeqCst), 404);

    s_i.fetch_add(1, Ordering::SeqCst);
    assert_eq!(A::get_s_i(), 405);
}

#[test]
fn static_at_explicit_path() {
    assert_eq!(*friend::max(), 200);
}

#[test]
fn associated_const() {
    assert_eq!(*friend::S_CI(), 403);
    assert!(core::ptr::eq(friend::S_CI(), friend::S_CI()));
}

#[test]
fn exposures_are_listed() {
    assert!(
        friend::EXPOSURES
            .iter()
            .all(|info| info.kind == ExposureKind::StaticField)
    );
    assert_eq!(friend::EXPOSURES[1].member, "MAX");
    assert_eq!(friend::EXPOSURES[1].accessor, "max");
}
