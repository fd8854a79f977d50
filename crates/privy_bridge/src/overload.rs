//! Dispatch for accessor names shared by several exposures.
//!
//! Rust has no function overloading, so a friend list that maps several
//! private members onto one accessor name (`fn m_f_pair(&self, i32, i32) ->
//! i32 as m_f;`) generates an uninhabited marker type per name and one impl
//! of these traits per member. The accessor takes its arguments as a tuple
//! and ordinary trait selection on the tuple type picks the member.
//!
//! Two members with identical receiver and argument types under one name are
//! conflicting impls, reported where the friend list is declared.

/// An overload set of methods, keyed by receiver `R` and argument tuple `Args`.
pub trait MethodOverload<R, Args> {
    type Output;

    fn call(owner: R, args: Args) -> Self::Output;
}

/// An overload set of associated functions, keyed by argument tuple `Args`.
pub trait StaticOverload<Args> {
    type Output;

    fn call(args: Args) -> Self::Output;
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    struct Calc {
        base: i32,
    }

    impl Calc {
        fn one(&self, x: i32) -> i32 {
            x + self.base
        }

        fn two(&self, x: i32, y: i32) -> i32 {
            x + y * self.base
        }
    }

    enum Add {}

    impl<'r> MethodOverload<&'r Calc, (i32,)> for Add {
        type Output = i32;

        fn call(owner: &'r Calc, (x,): (i32,)) -> i32 {
            owner.one(x)
        }
    }

    impl<'r> MethodOverload<&'r Calc, (i32, i32)> for Add {
        type Output = i32;

        fn call(owner: &'r Calc, (x, y): (i32, i32)) -> i32 {
            owner.two(x, y)
        }
    }

    fn add<R, Args>(owner: R, args: Args) -> <Add as MethodOverload<R, Args>>::Output
    where
        Add: MethodOverload<R, Args>,
    {
        <Add as MethodOverload<R, Args>>::call(owner, args)
    }

    enum Join {}

    impl StaticOverload<(char, u8)> for Join {
        type Output = char;

        fn call((c, n): (char, u8)) -> char {
            char::from(c as u8 + n)
        }
    }

    impl<'a, 'b> StaticOverload<(&'a str, &'b str)> for Join {
        type Output = String;

        fn call((a, b): (&'a str, &'b str)) -> String {
            let mut s = String::from(a);
            s.push_str(b);
            s
        }
    }

    fn join<Args>(args: Args) -> <Join as StaticOverload<Args>>::Output
    where
        Join: StaticOverload<Args>,
    {
        <Join as StaticOverload<Args>>::call(args)
    }

    #[test]
    fn method_dispatch_by_arity() {
        let calc = Calc { base: 3 };
        assert_eq!(add(&calc, (1,)), 4);
        assert_eq!(add(&calc, (1, 2)), 7);
    }

    #[test]
    fn static_dispatch_by_types() {
        assert_eq!(join(('A', 25)), 'Z');
        assert_eq!(join(("Hello", "World")), "HelloWorld");
    }
}
