use crate::{model::movie::Movie, render::ItemRenderer};

/// Something that shows an ordered list of movies and can be edited in place.
pub trait ListSurface {
    fn insert(&mut self, index: usize, movie: &Movie);
    fn remove(&mut self, index: usize);
    fn move_item(&mut self, from: usize, to: usize);
    fn rebind(&mut self, index: usize, movie: &Movie);
}

/// Keeps one rendered view per displayed movie, in display order.
pub struct RenderedList<R: ItemRenderer> {
    renderer: R,
    views: Vec<R::View>,
}

impl<R: ItemRenderer> RenderedList<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            views: vec![],
        }
    }

    pub fn views(&self) -> &[R::View] {
        &self.views
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

impl<R: ItemRenderer> ListSurface for RenderedList<R> {
    fn insert(&mut self, index: usize, movie: &Movie) {
        let view = self.renderer.render(movie);
        self.views.insert(index, view);
    }

    fn remove(&mut self, index: usize) {
        self.views.remove(index);
    }

    fn move_item(&mut self, from: usize, to: usize) {
        let view = self.views.remove(from);
        self.views.insert(to, view);
    }

    fn rebind(&mut self, index: usize, movie: &Movie) {
        self.views[index] = self.renderer.render(movie);
    }
}
