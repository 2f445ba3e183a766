//! Operator plumbing shared by the cursor types.

/// Implements `PartialEq` for a cursor type in terms of `Cursor::same_position`.
macro_rules! position_eq {
    ([$($params:tt)*] $cursor:ty) => {
        impl<$($params)*> PartialEq for $cursor
        where
            $cursor: $crate::cursor::Cursor,
        {
            fn eq(&self, other: &Self) -> bool {
                $crate::cursor::Cursor::same_position(self, other)
            }
        }
    };
}

/// Pointer-style arithmetic for random-access cursors: `c + n`, `n + c`,
/// `c - n`, `c += n`, `c -= n`, `b - a` and ordering.
macro_rules! random_access_ops {
    ([$($params:tt)*] $cursor:ty) => {
        impl<$($params)*> ::std::ops::AddAssign<isize> for $cursor
        where
            $cursor: $crate::cursor::RandomAccessCursor,
        {
            fn add_assign(&mut self, n: isize) {
                $crate::cursor::RandomAccessCursor::jump(self, n);
            }
        }

        impl<$($params)*> ::std::ops::SubAssign<isize> for $cursor
        where
            $cursor: $crate::cursor::RandomAccessCursor,
        {
            fn sub_assign(&mut self, n: isize) {
                $crate::cursor::RandomAccessCursor::jump(self, -n);
            }
        }

        impl<$($params)*> ::std::ops::Add<isize> for $cursor
        where
            $cursor: $crate::cursor::RandomAccessCursor,
        {
            type Output = Self;

            fn add(mut self, n: isize) -> Self {
                self += n;
                self
            }
        }

        impl<$($params)*> ::std::ops::Add<$cursor> for isize
        where
            $cursor: $crate::cursor::RandomAccessCursor,
        {
            type Output = $cursor;

            fn add(self, cursor: $cursor) -> $cursor {
                cursor + self
            }
        }

        impl<$($params)*> ::std::ops::Sub<isize> for $cursor
        where
            $cursor: $crate::cursor::RandomAccessCursor,
        {
            type Output = Self;

            fn sub(mut self, n: isize) -> Self {
                self -= n;
                self
            }
        }

        impl<$($params)*> ::std::ops::Sub for $cursor
        where
            $cursor: $crate::cursor::RandomAccessCursor,
        {
            type Output = isize;

            fn sub(self, origin: Self) -> isize {
                $crate::cursor::RandomAccessCursor::distance_from(&self, &origin)
            }
        }

        impl<$($params)*> PartialOrd for $cursor
        where
            $cursor: $crate::cursor::RandomAccessCursor,
        {
            fn partial_cmp(&self, other: &Self) -> Option<::std::cmp::Ordering> {
                Some($crate::cursor::RandomAccessCursor::position_cmp(self, other))
            }
        }
    };
}
