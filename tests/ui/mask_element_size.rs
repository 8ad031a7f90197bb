use lanewise::{Mask, Memcpy, Vector, cmp_lt, reinterpret_with};

fn main() {
    let m = cmp_lt(Vector::<i32, 4>::splat(0), Vector::splat(1));
    let _n: Mask<i16, 8> = reinterpret_with::<Memcpy, _, _>(m);
}
