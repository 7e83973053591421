use crate::util::id::Id;
use std::ops::Index;

pub struct Block<T> {
    items: Vec<T>,
}

impl<T> Block<T> {
    pub fn len(&self) -> Id<T> {
        Id::new(self.items.len() as u32)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, item: T) -> Id<T> {
        let id = self.len();
        self.items.push(item);
        id
    }
}

impl<T> Default for Block<T> {
    fn default() -> Self {
        let items = vec![];
        Self { items }
    }
}

impl<T> Index<Id<T>> for Block<T> {
    type Output = T;

    fn index(&self, id: Id<T>) -> &Self::Output {
        &self.items[id.as_usize()]
    }
}
