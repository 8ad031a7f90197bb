use lanewise::{Mask, Unmask, Vector, reinterpret_with};

fn main() {
    let v = Vector::<u64, 2>::splat(u64::MAX);
    let _m: Mask<u64, 2> = reinterpret_with::<Unmask, _, _>(v);
}
