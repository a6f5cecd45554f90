//! 导出服务
//!
//! 只负责把一个任务的表格写成文件

use std::fs;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;
use tracing::{debug, info};

use crate::error::{AppResult, ExportError};
use crate::models::{Cell, RecordSet, Table};

/// 导出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportFormat {
    #[default]
    Csv,
    Xlsx,
    /// 同时导出 CSV 和 XLSX
    Both,
}

impl ExportFormat {
    fn extensions(self) -> &'static [&'static str] {
        match self {
            ExportFormat::Csv => &["csv"],
            ExportFormat::Xlsx => &["xlsx"],
            ExportFormat::Both => &["csv", "xlsx"],
        }
    }
}

/// 导出服务
pub struct Exporter {
    output_dir: PathBuf,
    format: ExportFormat,
}

impl Exporter {
    pub fn new(output_dir: impl Into<PathBuf>, format: ExportFormat) -> Self {
        Self {
            output_dir: output_dir.into(),
            format,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// 导出记录集，文件名由任务生成；返回写出的文件路径
    pub fn export(&self, records: &RecordSet) -> AppResult<Vec<PathBuf>> {
        fs::create_dir_all(&self.output_dir).map_err(|source| ExportError::CreateDir {
            path: self.output_dir.display().to_string(),
            source,
        })?;

        let stem = records.job().output_stem();
        let table = records.to_table();
        let mut written = Vec::new();

        for extension in self.format.extensions() {
            let path = self.output_dir.join(format!("{}.{}", stem, extension));
            match *extension {
                "xlsx" => write_xlsx(&table, &path)?,
                _ => write_csv(&table, &path)?,
            }
            info!("💾 已保存 {} 条记录: {}", table.rows.len(), path.display());
            written.push(path);
        }

        Ok(written)
    }
}

/// 写 CSV：第一行是表头，没有索引列
pub fn write_csv(table: &Table, path: &Path) -> AppResult<()> {
    debug!("写入 CSV: {}", path.display());
    let mut writer = csv::Writer::from_path(path).map_err(ExportError::from)?;
    writer.write_record(&table.headers).map_err(ExportError::from)?;
    for row in &table.rows {
        writer
            .write_record(row.iter().map(Cell::to_string))
            .map_err(ExportError::from)?;
    }
    writer.flush().map_err(|source| ExportError::Write {
        path: path.display().to_string(),
        source,
    })?;
    Ok(())
}

/// 写 XLSX：数字列保留数字类型，空值留空单元格
pub fn write_xlsx(table: &Table, path: &Path) -> AppResult<()> {
    debug!("写入 XLSX: {}", path.display());
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, header) in table.headers.iter().enumerate() {
        sheet.write_string(0, col as u16, *header).map_err(ExportError::from)?;
    }
    for (row_index, row) in table.rows.iter().enumerate() {
        let row_num = row_index as u32 + 1;
        for (col, cell) in row.iter().enumerate() {
            let col = col as u16;
            match cell {
                Cell::Text(s) => {
                    sheet.write_string(row_num, col, s).map_err(ExportError::from)?;
                }
                Cell::Integer(n) => {
                    sheet.write_number(row_num, col, *n as f64).map_err(ExportError::from)?;
                }
                Cell::Float(x) => {
                    sheet.write_number(row_num, col, *x).map_err(ExportError::from)?;
                }
                Cell::Empty => {}
            }
        }
    }

    workbook.save(path).map_err(ExportError::from)?;
    Ok(())
}
