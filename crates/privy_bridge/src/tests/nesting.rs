mod outer {
    mod inner {
        pub(super) struct C2;

        impl C2 {
            fn g(_: i32) -> i32 {
                45
            }
        }

        crate::friends! {
            pub(in super::super) mod c2_friend for C2 {
                static fn g(i32) -> i32;
            }
        }
    }

    pub(super) use inner::c2_friend;
}

mod ns {
    pub struct B {
        m_i: i32,
    }

    impl B {
        pub fn new() -> Self {
            B { m_i: 1 }
        }

        pub fn get_m_i(&self) -> i32 {
            self.m_i
        }
    }

    /// A descendant of the owner's module may declare the friend list too.
    pub mod access {
        crate::friends! {
            pub mod friend for crate::tests::nesting::ns::B {
                field m_i: i32;
            }
        }
    }
}

mod borrowed {
    pub struct Named<'a> {
        name: &'a str,
    }

    impl<'a> Named<'a> {
        pub fn new(name: &'a str) -> Self {
            Named { name }
        }

        pub fn name(&self) -> &'a str {
            self.name
        }
    }

    crate::friends! {
        pub mod friend for Named<'static> {
            field name: &'static str;
        }
    }
}

mod template {
    pub struct TemplateA<T> {
        m_i: T,
    }

    impl<T> TemplateA<T> {
        pub fn new(m_i: T) -> Self {
            TemplateA { m_i }
        }

        fn get(&self) -> &T {
            &self.m_i
        }
    }

    crate::friends! {
        pub mod friend_i32 for TemplateA<i32> {
            field m_i: i32;
            fn get(&self) -> &i32;
        }

        pub mod friend_str for TemplateA<&'static str> {
            field m_i: &'static str;
        }
    }
}

#[test]
fn private_nested_owner() {
    assert_eq!(outer::c2_friend::g(0), 45);
}

#[test]
fn owner_by_path_from_descendant() {
    let mut b = ns::B::new();
    *ns::access::friend::m_i(&mut b) += 1;
    assert_eq!(b.get_m_i(), 2);

    let info = &ns::access::friend::EXPOSURES[0];
    assert_eq!(info.owner, "crate::tests::nesting::ns::B");
    assert!(info.is("B", "m_i"));
    assert!(info.is("crate::tests::nesting::ns::B", "m_i"));
}

#[test]
fn generic_owners() {
    let mut a = template::TemplateA::new(5);
    *template::friend_i32::m_i(&mut a) *= 2;
    assert_eq!(*template::friend_i32::get(&a), 10);

    let s = template::TemplateA::new("x");
    assert_eq!(*template::friend_str::m_i(&s), "x");

    let info = &template::friend_i32::EXPOSURES[0];
    assert_eq!(info.owner, "TemplateA<i32>");
    assert!(info.owner_is("TemplateA<i32>"));
    assert!(!info.owner_is("TemplateA<u8>"));
}

#[test]
fn owner_with_lifetime() {
    let mut named = borrowed::Named::new("before");
    assert_eq!(*borrowed::friend::name(&named), "before");

    *borrowed::friend::name(&mut named) = "after";
    assert_eq!(named.name(), "after");
}
