/// Arena handle of a tree node. `NIL` stands for the black sentinel leaf.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Id(u32);

impl Id {
    pub(crate) const NIL: Self = Self(u32::MAX);

    #[inline(always)]
    pub(crate) fn is_nil(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline(always)]
    pub(crate) fn idx(self) -> usize {
        self.0 as usize
    }
}

#[inline(always)]
pub(crate) fn id(v: usize) -> Id {
    debug_assert!(v < u32::MAX as usize);
    Id(v as u32)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left = 0,
    Right = 1,
}

impl Side {
    #[inline(always)]
    pub(crate) fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    #[inline(always)]
    pub(crate) fn idx(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) ch: [Id; 2],
    pub(crate) p: Id,
    pub(crate) red: bool,
    pub(crate) value: T,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T, parent: Id, red: bool) -> Self {
        Self {
            ch: [Id::NIL, Id::NIL],
            p: parent,
            red,
            value,
        }
    }

    #[inline(always)]
    pub(crate) fn child(&self, side: Side) -> Id {
        self.ch[side.idx()]
    }

    /// Children in left-then-right order, sentinels skipped.
    pub(crate) fn children(&self) -> impl Iterator<Item = Id> + '_ {
        self.ch.iter().copied().filter(|c| !c.is_nil())
    }
}
