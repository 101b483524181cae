/// Example questions offered as one-key shortcuts.
pub const EXAMPLE_QUESTIONS: [&str; 5] = [
    "What are the top 5 products by revenue?",
    "Show me sales by region",
    "Which category has the highest sales?",
    "How many customers are from each country?",
    "What is the average price per category?",
];
