//! Go source and test stubs. Indentation inside bodies is tabs, as gofmt
//! expects.

pub(super) const LIBRARY_SOURCE: &str = r#"package {{PACKAGE}}

// HelloWorld returns a greeting.
func HelloWorld() string {
	return "Hello, World"
}
"#;

pub(super) const LIBRARY_TEST: &str = r#"package {{PACKAGE}}

import "testing"

func TestHelloWorld(t *testing.T) {
	if HelloWorld() != "Hello, World" {
		t.Errorf("HelloWorld() = %s, want \"Hello, World\"", HelloWorld())
	}
}
"#;

pub(super) const LIBRARY_DOC: &str = r#"// Package {{PACKAGE}} provides a HelloWorld function.
//
// Replace this comment with a description of the package.
package {{PACKAGE}}
"#;

pub(super) const APPLICATION_MAIN: &str = r#"package main

import "fmt"

func main() {
	fmt.Println(HelloWorld())
}

// HelloWorld returns a greeting.
func HelloWorld() string {
	return "Hello, World"
}
"#;

pub(super) const APPLICATION_TEST: &str = r#"package main

import "testing"

func TestHelloWorld(t *testing.T) {
	if HelloWorld() != "Hello, World" {
		t.Errorf("HelloWorld() = %s, want \"Hello, World\"", HelloWorld())
	}
}
"#;

pub(super) const APPLICATION_DOC: &str = r#"// {{APP_NAME}} prints a greeting.
//
// Replace this comment with a description of the command.
package main
"#;

pub(super) const CLI_MAIN: &str = r#"package main

import "{{IMPORT_PATH}}/cmd"

func main() {
	cmd.Execute()
}
"#;

pub(super) const CLI_ROOT_COMMAND: &str = r#"package cmd

import (
	"{{IMPORT_PATH}}/internal/print"
	"github.com/spf13/cobra"
)

var rootCmd = &cobra.Command{
	Use: "{{APP_NAME}}",
}

// Execute runs the root command.
func Execute() {
	rootCmd.CompletionOptions.DisableDefaultCmd = true

	if err := rootCmd.Execute(); err != nil {
		print.Fatal(err)
	}
}
"#;

pub(super) const CLI_VERSION_COMMAND: &str = r#"package cmd

import (
	"fmt"

	"{{IMPORT_PATH}}/internal/cmdinfo"
	"github.com/spf13/cobra"
)

var versionCmd = &cobra.Command{
	Use:   "version",
	Short: "Show " + cmdinfo.Name() + " command version information",
	Run: func(cmd *cobra.Command, args []string) {
		fmt.Println(cmdinfo.Version())
	},
}

func init() {
	rootCmd.AddCommand(versionCmd)
}
"#;

pub(super) const CLI_CMDINFO: &str = r#"package cmdinfo

import (
	"fmt"
)

const (
	name    = "{{APP_NAME}}"
	version = "0.0.1"
)

// Version returns the command version.
func Version() string {
	return fmt.Sprintf("%s version %s (under Apache License version 2.0)",
		Name(), version)
}

// Name returns the command name.
func Name() string {
	return name
}
"#;

pub(super) const CLI_PRINT: &str = r#"package print

import (
	"fmt"
	"io"
	"os"
	"strings"

	"github.com/fatih/color"
	"github.com/mattn/go-colorable"
	"{{IMPORT_PATH}}/internal/cmdinfo"
)

var (
	// Stdout handles escape sequences for stdout.
	Stdout io.Writer = colorable.NewColorableStdout()
	// Stderr handles escape sequences for stderr.
	Stderr io.Writer = colorable.NewColorableStderr()
)

// Info prints an information message to Stdout.
func Info(msg string) {
	fmt.Fprintf(Stdout, "%s:%s: %s\n",
		cmdinfo.Name(), color.GreenString("INFO "), msg)
}

// Warn prints a warning message to Stderr.
func Warn(err interface{}) {
	fmt.Fprintf(Stderr, "%s:%s: %v\n",
		cmdinfo.Name(), color.YellowString("WARN "), err)
}

// Err prints an error message to Stderr.
func Err(err interface{}) {
	fmt.Fprintf(Stderr, "%s:%s: %v\n",
		cmdinfo.Name(), color.HiYellowString("ERROR"), err)
}

// Fatal prints a message to Stderr and exits with status 1.
func Fatal(err interface{}) {
	fmt.Fprintf(Stderr, "%s:%s: %v\n",
		cmdinfo.Name(), color.RedString("FATAL"), err)
	os.Exit(1)
}

// Question asks a yes/no question, re-asking up to three times on
// unrecognised input.
func Question(ask string) bool {
	for i := 0; i < 3; i++ {
		var response string
		fmt.Fprintf(Stdout, "%s:%s: %s",
			cmdinfo.Name(), color.GreenString("CHECK"), ask+" [Y/n] ")
		if _, err := fmt.Scanln(&response); err != nil {
			if strings.Contains(err.Error(), "expected newline") {
				continue
			}
			fmt.Fprintln(Stderr, err.Error())
			return false
		}

		switch strings.ToLower(response) {
		case "y", "yes":
			return true
		case "n", "no":
			return false
		}
	}
	return false
}
"#;

pub(super) const CLI_PRINT_TEST: &str = r#"package print

import (
	"bytes"
	"errors"
	"strings"
	"testing"
)

func TestInfo(t *testing.T) {
	var buf bytes.Buffer
	orig := Stdout
	Stdout = &buf
	defer func() { Stdout = orig }()

	Info("hello")

	if !strings.Contains(buf.String(), "hello") {
		t.Errorf("Info() wrote %q, want it to contain %q", buf.String(), "hello")
	}
}

func TestErr(t *testing.T) {
	var buf bytes.Buffer
	orig := Stderr
	Stderr = &buf
	defer func() { Stderr = orig }()

	Err(errors.New("boom"))

	if !strings.Contains(buf.String(), "boom") {
		t.Errorf("Err() wrote %q, want it to contain %q", buf.String(), "boom")
	}
}
"#;
