pub mod prelude {
    pub trait MaybeIntoParallelRefMutIterator<'data> {
        type Iter: Iterator;

        fn maybe_par_iter_mut(&'data mut self) -> Self::Iter;
    }

    impl<'data, I: 'data + ?Sized> MaybeIntoParallelRefMutIterator<'data> for I
    where
        &'data mut I: IntoIterator,
    {
        type Iter = <&'data mut I as IntoIterator>::IntoIter;

        fn maybe_par_iter_mut(&'data mut self) -> Self::Iter {
            self.into_iter()
        }
    }
}

pub fn current_num_threads() -> usize {
    1
}
