use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use brotli::enc::BrotliEncoderParams;
use brotli::CompressorWriter;

use crate::product::Product;

/// Streams products into a catalog document (`{"products": [...]}`).
pub struct CatalogWriter {
    writer: Box<dyn Write>,
    product_count: usize,
    finished: bool,
}

impl CatalogWriter {
    /// Creates a new CatalogWriter for the specified file path.
    ///
    /// Automatically enables Brotli compression if the file path ends with `.br`
    /// (e.g., `products.json.br`).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use rcatalog::CatalogWriter;
    /// # fn main() -> anyhow::Result<()> {
    /// let mut writer = CatalogWriter::new("products.json")?;
    /// writer.finish()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(file_path: &str) -> Result<Self> {
        let file = File::create(file_path)
            .with_context(|| format!("Failed to create file: {}", file_path))?;

        let writer: Box<dyn Write> = if file_path.ends_with(".br") {
            let buf_writer = BufWriter::new(file);
            let params = BrotliEncoderParams {
                quality: 6,
                lgwin: 22,
                ..Default::default()
            };
            Box::new(CompressorWriter::with_params(buf_writer, 4096, &params))
        } else {
            Box::new(BufWriter::new(file))
        };

        Self::from_writer(writer)
    }

    /// Wraps an arbitrary writer (used by tests and in-memory exports).
    pub fn from_writer(mut writer: Box<dyn Write>) -> Result<Self> {
        writer
            .write_all(b"{\"products\":[\n")
            .context("Failed to write catalog header")?;

        Ok(CatalogWriter {
            writer,
            product_count: 0,
            finished: false,
        })
    }

    pub fn write_product(&mut self, product: &Product) -> Result<()> {
        let json = serde_json::to_string(product)
            .with_context(|| format!("Failed to serialize product {}", product.id))?;

        if self.product_count > 0 {
            self.writer.write_all(b",\n").context("Failed to write separator")?;
        }
        self.writer
            .write_all(json.as_bytes())
            .context("Failed to write product")?;

        self.product_count += 1;
        Ok(())
    }

    /// Number of products written so far
    pub fn product_count(&self) -> usize {
        self.product_count
    }

    /// Closes the document and flushes. Returns the number of products written.
    pub fn finish(mut self) -> Result<usize> {
        self.close()?;
        Ok(self.product_count)
    }

    fn close(&mut self) -> Result<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;

        self.writer.write_all(b"\n]}\n").context("Failed to write catalog footer")?;
        self.writer.flush().context("Failed to flush writer")?;
        Ok(())
    }
}

impl Drop for CatalogWriter {
    fn drop(&mut self) {
        let _ = self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_catalog;
    use crate::product::ProductSpecifications;
    use std::env;

    fn product(id: u64) -> Product {
        Product {
            id,
            name: format!("Item {}", id),
            price: 12.5,
            image: "https://images.example.com/item.jpg".to_string(),
            description: "An item".to_string(),
            category: Default::default(),
            rating: 3.5,
            in_stock: true,
            specifications: ProductSpecifications::with_brand("Acme"),
        }
    }

    #[test]
    fn test_write_plain_and_compressed() -> Result<()> {
        for name in ["writer_test_catalog.json", "writer_test_catalog.json.br"] {
            let path = env::temp_dir().join(name);
            let path = path.to_str().unwrap();

            let mut writer = CatalogWriter::new(path)?;
            for id in 1..=3 {
                writer.write_product(&product(id))?;
            }
            assert_eq!(writer.finish()?, 3);

            let catalog = parse_catalog(path)?;
            assert_eq!(catalog.len(), 3);
            assert_eq!(catalog.get(2).unwrap(), &product(2));

            let _ = std::fs::remove_file(path);
        }
        Ok(())
    }

    #[test]
    fn test_drop_closes_document() -> Result<()> {
        let path = env::temp_dir().join("writer_test_drop.json");
        let path = path.to_str().unwrap();
        {
            let mut writer = CatalogWriter::new(path)?;
            writer.write_product(&product(9))?;
        }

        let catalog = parse_catalog(path)?;
        assert_eq!(catalog.get(9).map(|p| p.id), Some(9));
        let _ = std::fs::remove_file(path);
        Ok(())
    }
}
