use datetime::{DatePiece, LocalDate};

pub fn to_folder_name(date: &LocalDate) -> String {
    return format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        date.month().months_from_january() + 1,
        date.day()
    );
}
