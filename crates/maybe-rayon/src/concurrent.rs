pub mod prelude {
    pub use rayon::iter::{IndexedParallelIterator, ParallelIterator};
    use rayon::prelude::*;

    pub trait MaybeIntoParallelRefMutIterator<'data>: IntoParallelRefMutIterator<'data> {
        fn maybe_par_iter_mut(&'data mut self) -> Self::Iter;
    }

    impl<'data, I: IntoParallelRefMutIterator<'data> + ?Sized>
        MaybeIntoParallelRefMutIterator<'data> for I
    {
        fn maybe_par_iter_mut(&'data mut self) -> Self::Iter {
            self.par_iter_mut()
        }
    }
}

pub fn current_num_threads() -> usize {
    rayon::current_num_threads()
}
