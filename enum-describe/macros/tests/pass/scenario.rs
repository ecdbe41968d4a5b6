use enum_describe_macros::describe_enum;

#[describe_enum]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ETest {
    A,

    #[description("BofTest")]
    B,
}

fn main() {
    assert_eq!(ETest::A as isize, 0);
    assert_eq!(ETest::B as isize, 1);
    assert_ne!(ETest::A, ETest::B);
}
