use lanewise::{Mask, Vector, reinterpret};

fn main() {
    let v = Vector::<i32, 4>::splat(-1);
    let _m: Mask<i32, 4> = reinterpret(v);
}
