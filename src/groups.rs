pub trait Magma {
    type Elem: Clone;

    fn add(&self, lhs: Self::Elem, rhs: Self::Elem) -> Self::Elem;
}

pub trait Associativity: Magma {}
pub trait Commutativity: Magma {}
pub trait Identity: Magma {
    /// Identity
    fn id(&self) -> Self::Elem;
}

pub trait Monoid: Magma + Associativity + Identity {}
impl<M: Magma + Associativity + Identity> Monoid for M {}

pub trait CommutativeMonoid: Monoid + Commutativity {}
impl<CM: Monoid + Commutativity> CommutativeMonoid for CM {}

#[derive(Clone, Copy, Debug)]
pub struct NumAdditiveGroups<T>(std::marker::PhantomData<T>);

impl<T> Default for NumAdditiveGroups<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NumAdditiveGroups<T> {
    pub const fn new() -> Self {
        Self(std::marker::PhantomData)
    }
}

impl<T: num::Num + Clone> Magma for NumAdditiveGroups<T> {
    type Elem = T;

    #[inline]
    fn add(&self, lhs: T, rhs: T) -> T {
        lhs + rhs
    }
}
impl<T: num::Num + Clone> Identity for NumAdditiveGroups<T> {
    #[inline]
    fn id(&self) -> T {
        T::zero()
    }
}
impl<T: num::Num + Clone> Associativity for NumAdditiveGroups<T> {}
impl<T: num::Num + Clone> Commutativity for NumAdditiveGroups<T> {}

/// Max as the aggregate; the identity is the type's minimum. Wrap floats in
/// `ordered_float::OrderedFloat` to get the required total order.
#[derive(Clone, Copy, Debug)]
pub struct MaxMonoid<T>(std::marker::PhantomData<T>);

impl<T> Default for MaxMonoid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MaxMonoid<T> {
    pub const fn new() -> Self {
        Self(std::marker::PhantomData)
    }
}

impl<T: Ord + num::Bounded + Clone> Magma for MaxMonoid<T> {
    type Elem = T;

    #[inline]
    fn add(&self, lhs: T, rhs: T) -> T {
        lhs.max(rhs)
    }
}
impl<T: Ord + num::Bounded + Clone> Identity for MaxMonoid<T> {
    #[inline]
    fn id(&self) -> T {
        T::min_value()
    }
}
impl<T: Ord + num::Bounded + Clone> Associativity for MaxMonoid<T> {}
impl<T: Ord + num::Bounded + Clone> Commutativity for MaxMonoid<T> {}
