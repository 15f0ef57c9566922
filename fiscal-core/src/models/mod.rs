mod inss_plan;
mod irpf_bracket;
mod monthly_record;

pub use inss_plan::InssPlan;
pub use irpf_bracket::IrpfBracket;
pub use monthly_record::{MonthlyRecord, MonthlyRecordUpdate};
