//! Static help text. Nothing here is fetched or edited.

pub struct HelpSection {
    pub title: &'static str,
    pub icon: &'static str,
    pub paragraphs: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoTopic {
    Income,
    SpendingItems,
    Savings,
    RetirementSavings,
}

impl InfoTopic {
    pub fn title(self) -> &'static str {
        match self {
            InfoTopic::Income => "About Income",
            InfoTopic::SpendingItems => "About Spending Items",
            InfoTopic::Savings => "About Savings",
            InfoTopic::RetirementSavings => "About Retirement Savings",
        }
    }

    pub fn sections(self) -> &'static [HelpSection] {
        match self {
            InfoTopic::Income => INCOME,
            InfoTopic::SpendingItems => SPENDING_ITEMS,
            InfoTopic::Savings => SAVINGS,
            InfoTopic::RetirementSavings => RETIREMENT_SAVINGS,
        }
    }
}

const INCOME: &[HelpSection] = &[
    HelpSection {
        title: "What counts as income",
        icon: "💼",
        paragraphs: &["Every amount that arrives during the month: salary, a bonus, side work or a refund."],
    },
    HelpSection {
        title: "Starts fresh each month",
        icon: "🗓️",
        paragraphs: &["Income belongs to one month. A new month starts with an empty list."],
    },
    HelpSection {
        title: "Several sources",
        icon: "➕",
        paragraphs: &["Add one line per source so the month total stays easy to check."],
    },
];

const SPENDING_ITEMS: &[HelpSection] = &[
    HelpSection {
        title: "What goes here",
        icon: "🛒",
        paragraphs: &["Individual purchases, each filed under one of the month's categories with the date it happened."],
    },
    HelpSection {
        title: "Kept per month",
        icon: "🗓️",
        paragraphs: &["Items are attached to the month they were logged in and are read-only once that month is closed."],
    },
    HelpSection {
        title: "Transfers are listed elsewhere",
        icon: "🔁",
        paragraphs: &["Money moved to savings, retirement or back to income is a transfer and does not show in this table."],
    },
];

const SAVINGS: &[HelpSection] = &[
    HelpSection {
        title: "Money you can reach",
        icon: "💰",
        paragraphs: &["The savings balance is your cash buffer, shared by every month."],
    },
    HelpSection {
        title: "A target to aim for",
        icon: "🎯",
        paragraphs: &["Set a goal for the balance. Both numbers can be changed at any time with Edit."],
    },
    HelpSection {
        title: "Transfers add to it",
        icon: "🔁",
        paragraphs: &["Items marked as going to savings are added to the balance when they are recorded."],
    },
];

const RETIREMENT_SAVINGS: &[HelpSection] = &[
    HelpSection {
        title: "One running balance",
        icon: "🏦",
        paragraphs: &["This number is shared by every month. It is not reset when a new month starts."],
    },
    HelpSection {
        title: "Transfers add to it",
        icon: "🔁",
        paragraphs: &["Items marked as going to retirement are added to the balance when they are recorded."],
    },
    HelpSection {
        title: "Correcting the balance",
        icon: "✏️",
        paragraphs: &["Use Edit to overwrite the balance, for example after checking your pension statement."],
    },
];

pub const HOW_TO_USE: &[HelpSection] = &[
    HelpSection {
        title: "Months",
        icon: "🗓️",
        paragraphs: &[
            "Everything is organised by month. Each month keeps its own income, expenses, budgets and items.",
            "Months can be created, closed when finished, and reopened if something needs fixing.",
            "A closed month is read-only. Reopen it before changing anything.",
        ],
    },
    HelpSection {
        title: "Income",
        icon: "💼",
        paragraphs: &[
            "List what came in this month: salary, bonuses, side work.",
            "Income does not carry over. Each month starts empty.",
            "The income total feeds the remaining-funds figure and the budget check.",
        ],
    },
    HelpSection {
        title: "Fixed expenses",
        icon: "🧾",
        paragraphs: &[
            "Costs that repeat with the same amount every month, such as rent or insurance.",
            "They are kept apart from budget categories.",
            "Fixed expenses come off your income before budgeting.",
        ],
    },
    HelpSection {
        title: "Budgets",
        icon: "📊",
        paragraphs: &[
            "Give each spending category an amount for the month.",
            "Spending is compared against those amounts as the month goes on.",
            "The analysis view highlights overspent categories and spending with no budget.",
        ],
    },
    HelpSection {
        title: "Items",
        icon: "🛒",
        paragraphs: &[
            "Record purchases one by one under a category.",
            "An item can instead be routed to savings, retirement or back to income.",
            "Items always belong to a single month.",
        ],
    },
    HelpSection {
        title: "Savings",
        icon: "🏦",
        paragraphs: &[
            "General savings shows what has built up across all months.",
            "Retirement savings tracks long-term contributions.",
            "Goals let you watch progress towards a specific target.",
            "Transfers move money between income, savings and retirement.",
        ],
    },
    HelpSection {
        title: "Statistics",
        icon: "📈",
        paragraphs: &[
            "Trends, category breakdowns and month-to-month comparisons.",
            "Use them to spot habits and adjust next month's budget.",
        ],
    },
    HelpSection {
        title: "Settings",
        icon: "⚙️",
        paragraphs: &[
            "Pick the currency used for every amount on screen.",
            "Turn optional features such as transfers on or off.",
            "Export or import your data for backups.",
        ],
    },
];
