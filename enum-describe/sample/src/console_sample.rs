use enum_describe_macros::describe_enum;

#[describe_enum]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ETest {
    A,

    #[description("BofTest")]
    B,
}
