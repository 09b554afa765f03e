use std::io::Write;

pub const TITLE: &str = "===== VA Disability Compensation Calculator =====";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    EnterCurrent,
    EnterProposed,
    ShowCurrent,
    Compare,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::EnterCurrent,
        MenuChoice::EnterProposed,
        MenuChoice::ShowCurrent,
        MenuChoice::Compare,
        MenuChoice::Exit,
    ];

    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(MenuChoice::EnterCurrent),
            2 => Some(MenuChoice::EnterProposed),
            3 => Some(MenuChoice::ShowCurrent),
            4 => Some(MenuChoice::Compare),
            5 => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            MenuChoice::EnterCurrent => 1,
            MenuChoice::EnterProposed => 2,
            MenuChoice::ShowCurrent => 3,
            MenuChoice::Compare => 4,
            MenuChoice::Exit => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::EnterCurrent => "Enter CURRENT ratings",
            MenuChoice::EnterProposed => "Enter PROPOSED ratings",
            MenuChoice::ShowCurrent => "Show combined rating & estimated pay (CURRENT)",
            MenuChoice::Compare => "Compare CURRENT vs PROPOSED",
            MenuChoice::Exit => "Exit",
        }
    }
}

pub fn display<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{TITLE}")?;
    for choice in MenuChoice::ALL {
        writeln!(out, "{}. {}", choice.number(), choice.label())?;
    }
    Ok(())
}
