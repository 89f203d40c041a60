use comfy_table::presets::ASCII_FULL;
use comfy_table::Table;
use salary_stats::LanguageStatistics;

pub fn print_statistics(title: &str, statistics: &LanguageStatistics) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec![
        "Programming language",
        "Vacancies found",
        "Vacancies processed",
        "Average salary",
    ]);
    for (language, summary) in statistics {
        table.add_row(vec![
            language.clone(),
            summary.vacancies_found.to_string(),
            summary.vacancies_processed.to_string(),
            summary.average_salary.to_string(),
        ]);
    }
    println!("{title}");
    println!("{table}");
}
