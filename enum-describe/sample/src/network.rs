use enum_describe_macros::describe_enum;

pub const RETIRED_LABEL: &str = "Retired protocol";

pub mod proto {
    use enum_describe_macros::describe_enum;

    #[describe_enum]
    #[repr(u8)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Protocol {
        Tcp = 6,
        #[description("User Datagram Protocol")]
        Udp = 17,
        #[description(crate::network::RETIRED_LABEL)]
        Ipx = 250,
    }
}

#[describe_enum]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    #[description(format!("Up since {}", 1970))]
    Up,
    Down,
}

#[describe_enum]
pub enum Unreachable {}
