//! Content for the files a project layout generates
//!
//! Plain string templating: the project name and creation date are
//! substituted in, nothing is escaped.

use serde_json::json;

/// Values substituted into generated files
#[derive(Debug, Clone)]
pub struct TemplateContext {
    pub project_name: String,
    pub project_type: String,
    /// `YYYY-MM-DD`
    pub created_date: String,
}

impl TemplateContext {
    pub fn new(project_name: impl Into<String>, project_type: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            project_type: project_type.into(),
            created_date: chrono::Local::now().format("%Y-%m-%d").to_string(),
        }
    }
}

/// Produces a generated file's content
pub type ContentGenerator = fn(&TemplateContext) -> String;

pub fn jupyter_notebook(ctx: &TemplateContext) -> String {
    let notebook = json!({
        "cells": [
            {
                "cell_type": "markdown",
                "metadata": {},
                "source": [
                    format!("# {} Analysis\n", ctx.project_name),
                    "\n",
                    "## Project Overview\n",
                    format!("Welcome to the data analysis for {}.\n", ctx.project_name),
                    "\n",
                    "## Setup\n",
                    "Import required libraries and configure the environment."
                ]
            },
            {
                "cell_type": "code",
                "execution_count": null,
                "metadata": {},
                "outputs": [],
                "source": [
                    "# Import required libraries\n",
                    "import pandas as pd\n",
                    "import numpy as np\n",
                    "import matplotlib.pyplot as plt\n",
                    "import seaborn as sns\n",
                    "\n",
                    "# Configure plotting\n",
                    "plt.style.use('default')\n",
                    "sns.set_palette('husl')\n",
                    "\n",
                    "print('Environment setup complete!')"
                ]
            }
        ],
        "metadata": {
            "kernelspec": {
                "display_name": "Python 3",
                "language": "python",
                "name": "python3"
            },
            "language_info": {
                "name": "python",
                "version": "3.13.0"
            }
        },
        "nbformat": 4,
        "nbformat_minor": 4
    });
    // A json! value always serializes
    serde_json::to_string_pretty(&notebook).unwrap_or_default()
}

pub fn jupyter_requirements(_ctx: &TemplateContext) -> String {
    requirements(&[
        "jupyter",
        "jupyterlab",
        "pandas",
        "numpy",
        "matplotlib",
        "seaborn",
        "plotly",
        "ipywidgets",
    ])
}

pub fn data_science_requirements(_ctx: &TemplateContext) -> String {
    requirements(&[
        "pandas",
        "numpy",
        "scipy",
        "scikit-learn",
        "matplotlib",
        "seaborn",
        "plotly",
        "jupyter",
        "jupyterlab",
        "polars",
        "pyarrow",
        "optuna",
        "mlflow",
    ])
}

fn requirements(packages: &[&str]) -> String {
    let mut out = packages.join("\n");
    out.push('\n');
    out
}

pub fn docker_compose(ctx: &TemplateContext) -> String {
    let service = compose_service_name(&ctx.project_name);
    format!(
        r#"services:
  {service}:
    build: .
    ports:
      - "8000:8000"
    environment:
      - ENV=development
    volumes:
      - ./src:/app/src
    depends_on:
      - redis
      - postgres

  redis:
    image: redis:7-alpine
    ports:
      - "6379:6379"

  postgres:
    image: postgres:15-alpine
    environment:
      POSTGRES_DB: {service}
      POSTGRES_USER: dev
      POSTGRES_PASSWORD: devpass
    ports:
      - "5432:5432"
    volumes:
      - postgres_data:/var/lib/postgresql/data

volumes:
  postgres_data:
"#
    )
}

/// Compose service names must be lowercase
fn compose_service_name(name: &str) -> String {
    name.to_lowercase().replace(|c: char| c == ' ' || c == '.', "-")
}

pub fn dockerfile(_ctx: &TemplateContext) -> String {
    r#"FROM python:3.13-slim

WORKDIR /app

COPY requirements.txt .
RUN pip install --no-cache-dir -r requirements.txt

COPY . .

EXPOSE 8000

CMD ["python", "-m", "uvicorn", "src.main:app", "--host", "0.0.0.0", "--port", "8000", "--reload"]
"#
    .to_string()
}

pub fn terraform_main(ctx: &TemplateContext) -> String {
    format!(
        r#"# {name} Infrastructure

terraform {{
  required_version = ">= 1.0"

  required_providers {{
    aws = {{
      source  = "hashicorp/aws"
      version = "~> 5.0"
    }}
  }}
}}

provider "aws" {{
  region = var.aws_region
}}

variable "aws_region" {{
  description = "AWS region"
  type        = string
  default     = "us-west-2"
}}

variable "project_name" {{
  description = "Project name"
  type        = string
  default     = "{name}"
}}
"#,
        name = ctx.project_name
    )
}

pub fn pytest_ini(_ctx: &TemplateContext) -> String {
    r#"[pytest]
testpaths = tests
python_files = test_*.py *_test.py
python_classes = Test*
python_functions = test_*
addopts =
    --strict-markers
    --strict-config
    --verbose
    --cov=src
    --cov-report=term-missing
    --cov-report=html
    --cov-fail-under=80

markers =
    unit: Unit tests
    integration: Integration tests
    e2e: End-to-end tests
    slow: Slow running tests
"#
    .to_string()
}

pub fn desktop_main(ctx: &TemplateContext) -> String {
    format!(
        r#"#!/usr/bin/env python3
"""
{name} Desktop Application
Main application entry point.
"""

import sys
from pathlib import Path

sys.path.insert(0, str(Path(__file__).parent / "src"))

from gui.main_window import MainWindow


def main():
    import tkinter as tk

    root = tk.Tk()
    root.title("{name}")
    root.geometry("800x600")

    MainWindow(root)

    try:
        root.mainloop()
    except KeyboardInterrupt:
        print("Application interrupted by user")
        sys.exit(0)


if __name__ == "__main__":
    main()
"#,
        name = ctx.project_name
    )
}

pub fn desktop_main_window(_ctx: &TemplateContext) -> String {
    r#""""
Main application window.
"""

import tkinter as tk
from tkinter import ttk, messagebox


class MainWindow:
    def __init__(self, root):
        self.root = root
        self.setup_ui()

    def setup_ui(self):
        main_frame = ttk.Frame(self.root, padding="10")
        main_frame.grid(row=0, column=0, sticky=(tk.W, tk.E, tk.N, tk.S))

        self.root.columnconfigure(0, weight=1)
        self.root.rowconfigure(0, weight=1)
        main_frame.columnconfigure(0, weight=1)
        main_frame.rowconfigure(0, weight=1)

        welcome_label = ttk.Label(
            main_frame,
            text="Welcome to your desktop application!",
            font=("Arial", 16, "bold"),
        )
        welcome_label.grid(row=0, column=0, pady=20)

        sample_button = ttk.Button(
            main_frame,
            text="Click Me",
            command=self.on_button_click,
        )
        sample_button.grid(row=1, column=0, pady=10)

    def on_button_click(self):
        messagebox.showinfo("Hello", "Button clicked! Start building your app.")
"#
    .to_string()
}

pub fn custom_readme(ctx: &TemplateContext) -> String {
    format!(
        r#"# {name} - Custom Project

This is a custom project created with the agentic SDLC framework on {date}.

## Project Structure

- `src/` - Your main source code
- `tests/` - Your test files
- `docs/` - Documentation
- `config/` - Configuration files
- `custom/` - Custom project-specific files

## Customization Guide

1. Edit `project-brief.md` to define your specific requirements
2. Modify the directory structure as needed for your project type
3. Update `config/agentic-config.json` with your specific agents and workflow
4. Add your custom dependencies to requirements files
"#,
        name = ctx.project_name,
        date = ctx.created_date
    )
}
