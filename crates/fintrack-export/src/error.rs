use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("template parse error: {0}")]
    TemplateParse(String),

    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("artifact write failed: {0}")]
    Io(#[from] std::io::Error),
}

impl From<tera::Error> for ExportError {
    fn from(e: tera::Error) -> Self {
        ExportError::TemplateRender(e.to_string())
    }
}
