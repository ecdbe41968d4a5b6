#[enum_describe_macros::describe_enum]
#[repr(u8)]
pub enum Level {
    #[description = "lowest"]
    Low = 1,
    #[description(concat!("hi", "gh"))]
    High = 9,
}

#[enum_describe_macros::describe_enum]
pub enum Never {}

fn main() {
    assert_eq!(Level::Low as u8, 1);
    assert_eq!(Level::High as u8, 9);
}
